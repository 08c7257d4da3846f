//! Options for the Lumiere binary.
//!
//! TOML-based settings for the CLI: which Gemini model to call, how the
//! guidance request samples, and where exported assets land. Defaults
//! ship inside the binary; a user file at `~/.config/lumiere/lumiere.toml`
//! or `./lumiere.toml` overrides them field by field. The API credential
//! is never part of this file, it stays in the environment.

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use lumiere_error::{ConfigError, LumiereResult};
use lumiere_models::DEFAULT_GEMINI_MODEL;
use lumiere_studio::GuidanceTuning;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Settings shipped inside the binary, lowest precedence.
const DEFAULT_CONFIG: &str = include_str!("../../../lumiere.toml");

/// Model selection for generation and feedback requests.
///
/// ```toml
/// [models]
/// generation = "gemini-2.5-flash"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelsConfig {
    /// Gemini model used for asset generation and script feedback
    pub generation: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            generation: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

/// Destination settings for exported assets.
///
/// ```toml
/// [export]
/// dir = "lumiere-out"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory where generated assets are written
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("lumiere-out"),
        }
    }
}

/// Top-level options for the Lumiere binary.
///
/// # Examples
///
/// ```no_run
/// use lumiere::config::LumiereConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = LumiereConfig::load()?;
/// println!("Generation model: {}", config.models.generation);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct LumiereConfig {
    /// Model selection for generation and feedback
    #[serde(default)]
    pub models: ModelsConfig,

    /// Sampling options for the short feedback request
    #[serde(default)]
    pub guidance: GuidanceTuning,

    /// Destination settings for exported assets
    #[serde(default)]
    pub export: ExportConfig,
}

impl LumiereConfig {
    /// Read options from one explicit file, no layering.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LumiereResult<Self> {
        debug!("Loading options from a single file");
        finish(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load options, layering user files over the bundled defaults.
    ///
    /// Precedence, lowest first: bundled defaults, then
    /// `~/.config/lumiere/lumiere.toml`, then `./lumiere.toml`. The user
    /// files are optional; a missing one is skipped silently.
    #[instrument]
    pub fn load() -> LumiereResult<Self> {
        debug!("Layering options: working dir over home dir over bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let user_file = home.join(".config/lumiere/lumiere.toml");
            builder = builder.add_source(File::from(user_file).required(false));
        }
        builder = builder.add_source(File::with_name("lumiere").required(false));

        finish(builder)
    }
}

fn finish(builder: ConfigBuilder<DefaultState>) -> LumiereResult<LumiereConfig> {
    let merged = builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to read options: {}", e)))?;
    let config = merged
        .try_deserialize()
        .map_err(|e| ConfigError::new(format!("Failed to parse options: {}", e)))?;
    Ok(config)
}
