//! Asset kinds and generated payloads.

use serde::{Deserialize, Serialize};

/// Kind of cinematic asset that can be generated from a script.
///
/// Each kind maps to exactly one instruction template and one result shape.
///
/// # Examples
///
/// ```
/// use lumiere_core::AssetKind;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(format!("{}", AssetKind::AudioPrompt), "audio-prompt");
/// assert_eq!(AssetKind::iter().count(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// Cinematic production blueprint (markdown)
    #[display("blueprint")]
    Blueprint,
    /// Style and lyrics pair for a music generator
    #[display("audio-prompt")]
    AudioPrompt,
    /// Numbered image prompts, one per storyboard frame
    #[display("storyboard")]
    Storyboard,
}

impl AssetKind {
    /// Convert to string representation for file naming and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Blueprint => "blueprint",
            AssetKind::AudioPrompt => "audio-prompt",
            AssetKind::Storyboard => "storyboard",
        }
    }
}

impl std::str::FromStr for AssetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blueprint" => Ok(AssetKind::Blueprint),
            "audio-prompt" => Ok(AssetKind::AudioPrompt),
            "storyboard" => Ok(AssetKind::Storyboard),
            _ => Err(format!("Unknown asset kind: {}", s)),
        }
    }
}

/// Structured prompt for a music generation service.
///
/// This is the schema-constrained asset: the remote call requests a JSON
/// object with exactly these two string fields.
///
/// # Examples
///
/// ```
/// use lumiere_core::AudioPrompt;
///
/// let prompt: AudioPrompt =
///     serde_json::from_str(r#"{"style": "dark synth", "lyrics": "[Verse] ..."}"#).unwrap();
/// assert_eq!(prompt.style, "dark synth");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioPrompt {
    /// Musical style description
    pub style: String,
    /// Formatted lyrics with section markers
    pub lyrics: String,
}

/// A successfully generated asset.
///
/// Blueprint and storyboard assets are plain text; the audio prompt is the
/// structured pair from the schema-constrained call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AssetPayload {
    /// Markdown production blueprint
    Blueprint(String),
    /// Structured audio generation prompt
    Audio(AudioPrompt),
    /// Numbered storyboard image prompts
    Storyboard(String),
}

impl AssetPayload {
    /// The kind of asset this payload belongs to.
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetPayload::Blueprint(_) => AssetKind::Blueprint,
            AssetPayload::Audio(_) => AssetKind::AudioPrompt,
            AssetPayload::Storyboard(_) => AssetKind::Storyboard,
        }
    }
}
