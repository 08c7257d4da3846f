//! Generation request submitted by a caller.

use crate::AssetKind;
use derive_getters::Getters;
use lumiere_error::{LumiereResult, ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Minimum trimmed script length accepted by [`ScriptRequest::validate`].
pub const MIN_SCRIPT_CHARS: usize = 10;

/// Minimum trimmed theme length accepted by [`ScriptRequest::validate`].
pub const MIN_THEME_CHARS: usize = 3;

/// A script excerpt, a theme, and the set of asset kinds to generate.
///
/// Immutable once constructed. Validation is a caller-side concern: front
/// ends call [`ScriptRequest::validate`] before submitting, and the
/// orchestrator assumes it was honored.
///
/// # Examples
///
/// ```
/// use lumiere_core::{AssetKind, ScriptRequest};
///
/// let request = ScriptRequest::new(
///     "INT. OFFICE - DAY\nJane stares at the screen.",
///     "Cyberpunk Noir",
///     vec![AssetKind::Blueprint, AssetKind::Storyboard],
/// );
///
/// assert!(request.validate().is_ok());
/// assert_eq!(request.kinds().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ScriptRequest {
    /// Raw script text
    script: String,
    /// Creative theme applied to every instruction template
    theme: String,
    /// Asset kinds to generate, in submission order
    kinds: Vec<AssetKind>,
}

impl ScriptRequest {
    /// Create a new request. Duplicate kinds are dropped, keeping the
    /// first occurrence, so the kind set behaves as a set.
    pub fn new(
        script: impl Into<String>,
        theme: impl Into<String>,
        kinds: Vec<AssetKind>,
    ) -> Self {
        let mut seen = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        Self {
            script: script.into(),
            theme: theme.into(),
            kinds: seen,
        }
    }

    /// Check the submission preconditions.
    ///
    /// The trimmed script must be longer than [`MIN_SCRIPT_CHARS`], the
    /// trimmed theme longer than [`MIN_THEME_CHARS`], and at least one
    /// asset kind must be selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use lumiere_core::{AssetKind, ScriptRequest};
    ///
    /// let request = ScriptRequest::new("too short", "Noir", vec![AssetKind::Blueprint]);
    /// assert!(request.validate().is_err());
    /// ```
    pub fn validate(&self) -> LumiereResult<()> {
        let script_len = self.script.trim().chars().count();
        if script_len <= MIN_SCRIPT_CHARS {
            Err(ValidationError::new(ValidationErrorKind::ScriptTooShort {
                minimum: MIN_SCRIPT_CHARS,
                actual: script_len,
            }))?;
        }

        let theme_len = self.theme.trim().chars().count();
        if theme_len <= MIN_THEME_CHARS {
            Err(ValidationError::new(ValidationErrorKind::ThemeTooShort {
                minimum: MIN_THEME_CHARS,
                actual: theme_len,
            }))?;
        }

        if self.kinds.is_empty() {
            Err(ValidationError::new(ValidationErrorKind::NoKindsSelected))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ScriptRequest {
        ScriptRequest::new(
            "INT. OFFICE - DAY\nJane stares at the screen.",
            "Cyberpunk Noir",
            vec![AssetKind::Blueprint],
        )
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn rejects_short_script_after_trimming() {
        let request = ScriptRequest::new("   1234567890   ", "Noir", vec![AssetKind::Blueprint]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_short_theme() {
        let request = ScriptRequest::new(
            "INT. OFFICE - DAY\nJane stares at the screen.",
            " ab ",
            vec![AssetKind::Blueprint],
        );
        assert!(request.validate().is_err());
    }

    #[test]
    fn rejects_empty_kind_set() {
        let request = ScriptRequest::new(
            "INT. OFFICE - DAY\nJane stares at the screen.",
            "Cyberpunk Noir",
            vec![],
        );
        assert!(request.validate().is_err());
    }

    #[test]
    fn duplicate_kinds_collapse_to_one() {
        let request = ScriptRequest::new(
            "INT. OFFICE - DAY\nJane stares at the screen.",
            "Cyberpunk Noir",
            vec![
                AssetKind::Storyboard,
                AssetKind::Storyboard,
                AssetKind::Blueprint,
            ],
        );
        assert_eq!(
            request.kinds(),
            &[AssetKind::Storyboard, AssetKind::Blueprint]
        );
    }
}
