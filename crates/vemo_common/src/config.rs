//! Vemo Configuration
//!
//! Voice, pacing and logging settings for a chat session.
//!
//! Lookup order for the config file:
//! 1. explicit path (`--config`)
//! 2. `$VEMO_CONFIG`
//! 3. `<config_dir>/vemo/config.toml`
//!
//! A missing file is not an error: defaults apply.

use crate::error::{Result, VemoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

const CONFIG_DIR_NAME: &str = "vemo";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_ENV: &str = "VEMO_CONFIG";

/// Valid range for speech rate and pitch multipliers
pub const VOICE_MULTIPLIER_MIN: f64 = 0.5;
pub const VOICE_MULTIPLIER_MAX: f64 = 2.0;

/// Volume is not user-adjustable
pub const DEFAULT_VOLUME: f64 = 0.9;

/// Voice settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Speak replies aloud
    #[serde(default = "default_voice_enabled")]
    pub enabled: bool,

    /// Preferred synthesis voice name (None = pick automatically)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,

    /// Playback speed multiplier (valid: 0.5-2.0)
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Playback pitch multiplier (valid: 0.5-2.0)
    #[serde(default = "default_pitch")]
    pub pitch: f64,
}

fn default_voice_enabled() -> bool {
    true
}

fn default_rate() -> f64 {
    0.95
}

fn default_pitch() -> f64 {
    0.9
}

impl VoiceConfig {
    pub fn effective_rate(&self) -> f64 {
        clamp_multiplier(self.rate)
    }

    pub fn effective_pitch(&self) -> f64 {
        clamp_multiplier(self.pitch)
    }

    pub fn rate_was_clamped(&self) -> bool {
        self.rate != self.effective_rate()
    }

    pub fn pitch_was_clamped(&self) -> bool {
        self.pitch != self.effective_pitch()
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: default_voice_enabled(),
            voice: None,
            rate: default_rate(),
            pitch: default_pitch(),
        }
    }
}

/// Clamp a rate/pitch multiplier into the supported range. NaN falls back to 1.0.
pub fn clamp_multiplier(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(VOICE_MULTIPLIER_MIN, VOICE_MULTIPLIER_MAX)
}

/// Reply pacing and conversation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Thinking delay per reply character (ms)
    #[serde(default = "default_thinking_ms_per_char")]
    pub thinking_ms_per_char: u64,

    /// Upper bound on the thinking delay (ms)
    #[serde(default = "default_thinking_cap_ms")]
    pub thinking_cap_ms: u64,

    /// Pause between showing a reply and speaking it (ms)
    #[serde(default = "default_speak_delay_ms")]
    pub speak_delay_ms: u64,

    /// Pause between spoken sentences (ms)
    #[serde(default = "default_sentence_gap_ms")]
    pub sentence_gap_ms: u64,

    /// Recent utterances kept as conversation context (valid: 1-50)
    #[serde(default = "default_context_capacity")]
    pub context_capacity: usize,
}

fn default_thinking_ms_per_char() -> u64 {
    35
}

fn default_thinking_cap_ms() -> u64 {
    2000
}

fn default_speak_delay_ms() -> u64 {
    300
}

fn default_sentence_gap_ms() -> u64 {
    100
}

fn default_context_capacity() -> usize {
    5
}

impl ChatConfig {
    pub fn effective_context_capacity(&self) -> usize {
        self.context_capacity.clamp(1, 50)
    }

    pub fn speak_delay(&self) -> Duration {
        Duration::from_millis(self.speak_delay_ms)
    }

    pub fn sentence_gap(&self) -> Duration {
        Duration::from_millis(self.sentence_gap_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_ms_per_char: default_thinking_ms_per_char(),
            thinking_cap_ms: default_thinking_cap_ms(),
            speak_delay_ms: default_speak_delay_ms(),
            sentence_gap_ms: default_sentence_gap_ms(),
            context_capacity: default_context_capacity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Complete Vemo configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VemoConfig {
    #[serde(default)]
    pub voice: VoiceConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl VemoConfig {
    /// Load config, resolving the path from `explicit`, `$VEMO_CONFIG`, then
    /// the user config directory. Missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VemoConfig = toml::from_str(content)?;
        config.validate()?;
        config.warn_clamped();
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.chat.thinking_cap_ms > 60_000 {
            return Err(VemoError::ConfigInvalid(format!(
                "chat.thinking_cap_ms must be at most 60000, got {}",
                self.chat.thinking_cap_ms
            )));
        }
        if let Some(voice) = &self.voice.voice {
            if voice.trim().is_empty() {
                return Err(VemoError::ConfigInvalid(
                    "voice.voice must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn warn_clamped(&self) {
        if self.voice.rate_was_clamped() {
            warn!(
                "voice.rate {} out of range, using {}",
                self.voice.rate,
                self.voice.effective_rate()
            );
        }
        if self.voice.pitch_was_clamped() {
            warn!(
                "voice.pitch {} out of range, using {}",
                self.voice.pitch,
                self.voice.effective_pitch()
            );
        }
    }
}

/// Resolve which config file would be read
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = VemoConfig::default();
        assert!(config.voice.enabled);
        assert_eq!(config.voice.rate, 0.95);
        assert_eq!(config.voice.pitch, 0.9);
        assert_eq!(config.chat.thinking_ms_per_char, 35);
        assert_eq!(config.chat.thinking_cap_ms, 2000);
        assert_eq!(config.chat.context_capacity, 5);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_voice_clamping() {
        let mut voice = VoiceConfig {
            rate: 0.1,
            ..Default::default()
        };
        assert_eq!(voice.effective_rate(), 0.5);
        assert!(voice.rate_was_clamped());

        voice.rate = 3.0;
        assert_eq!(voice.effective_rate(), 2.0);

        voice.pitch = 1.2;
        assert_eq!(voice.effective_pitch(), 1.2);
        assert!(!voice.pitch_was_clamped());

        assert_eq!(clamp_multiplier(f64::NAN), 1.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = VemoConfig::from_toml("[voice]\nrate = 1.5\n").unwrap();
        assert_eq!(config.voice.rate, 1.5);
        assert_eq!(config.voice.pitch, 0.9);
        assert_eq!(config.chat.sentence_gap_ms, 100);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = VemoConfig::from_toml("[chat]\nthinking_cap_ms = 900000\n").unwrap_err();
        assert_eq!(err.code(), "config_invalid");

        let err = VemoConfig::from_toml("[voice]\nrate = \"fast\"\n").unwrap_err();
        assert_eq!(err.code(), "config_parse");
    }

    #[test]
    fn test_rendered_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = VemoConfig::default();
        config.voice.voice = Some("Daniel".to_string());
        config.voice.enabled = false;
        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        let loaded = VemoConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.voice.voice.as_deref(), Some("Daniel"));
        assert!(!loaded.voice.enabled);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let config = VemoConfig::load(Some(&path)).unwrap();
        assert!(config.voice.enabled);
    }

    #[test]
    fn test_toml_sections() {
        let toml_str = VemoConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[voice]"));
        assert!(toml_str.contains("[chat]"));
        assert!(toml_str.contains("[log]"));
    }
}
