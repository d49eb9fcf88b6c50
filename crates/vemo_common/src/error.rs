//! Error types for Vemo.
//!
//! Classification, normalization and action lookups are total and never
//! produce these. Only the edges that touch files or the audio backend do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    ConfigInvalid(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),

    #[error("Voice not available: {0}")]
    VoiceUnavailable(String),
}

impl VemoError {
    /// Short stable code, used in log lines and `--json` output
    pub fn code(&self) -> &'static str {
        match self {
            VemoError::Io(_) => "io",
            VemoError::ConfigParse(_) => "config_parse",
            VemoError::ConfigSerialize(_) => "config_serialize",
            VemoError::ConfigInvalid(_) => "config_invalid",
            VemoError::Synthesis(_) => "synthesis",
            VemoError::VoiceUnavailable(_) => "voice_unavailable",
        }
    }

    /// Backend failures a speech sequence reports as "speaking stopped"
    pub fn is_audio(&self) -> bool {
        matches!(self, VemoError::Synthesis(_) | VemoError::VoiceUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, VemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_errors_are_soft() {
        assert!(VemoError::Synthesis("device busy".into()).is_audio());
        assert!(!VemoError::ConfigInvalid("rate".into()).is_audio());
    }

    #[test]
    fn test_error_display() {
        let err = VemoError::VoiceUnavailable("Daniel".into());
        assert_eq!(err.to_string(), "Voice not available: Daniel");
        assert_eq!(err.code(), "voice_unavailable");
    }
}
