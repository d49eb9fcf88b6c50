//! Console speech backend
//!
//! Renders each sentence as a `🔊` line and holds it for roughly the time a
//! real voice would take at the configured rate. Cancel cuts the current
//! sentence short.

use async_trait::async_trait;
use owo_colors::OwoColorize;
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use vemo_common::audio::{SpeechSynthesizer, Utterance, VoiceInfo};
use vemo_common::Result;

/// Time per spoken word at rate 1.0 (about 180 words per minute)
const WORD_MS: f64 = 330.0;

const CONSOLE_VOICES: &[(&str, &str)] = &[
    ("Samantha", "en-US"),
    ("Daniel", "en-GB"),
    ("Alex", "en-US"),
    ("Karen", "en-AU"),
];

pub struct ConsoleSynthesizer {
    current: Mutex<CancellationToken>,
    realtime: bool,
}

impl ConsoleSynthesizer {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(CancellationToken::new()),
            realtime: true,
        }
    }

    /// Print sentences without holding for speaking time
    pub fn instant() -> Self {
        Self {
            realtime: false,
            ..Self::new()
        }
    }

    fn token(&self) -> CancellationToken {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for ConsoleSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulated time to speak `text` at `rate`
pub fn speaking_time(text: &str, rate: f64) -> Duration {
    let words = text.split_whitespace().count() as f64;
    let rate = if rate > 0.0 { rate } else { 1.0 };
    Duration::from_millis((words * WORD_MS / rate) as u64)
}

#[async_trait]
impl SpeechSynthesizer for ConsoleSynthesizer {
    fn voices(&self) -> Vec<VoiceInfo> {
        CONSOLE_VOICES
            .iter()
            .map(|(name, lang)| VoiceInfo::new(name, lang))
            .collect()
    }

    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        let token = self.token();
        if token.is_cancelled() {
            return Ok(());
        }

        println!("{}  {}", "🔊".dimmed(), utterance.text.italic().dimmed());
        if !self.realtime {
            return Ok(());
        }

        let hold = speaking_time(&utterance.text, utterance.rate);
        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(hold) => {}
        }
        Ok(())
    }

    fn cancel(&self) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        current.cancel();
        *current = CancellationToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(text: &str, rate: f64) -> Utterance {
        Utterance {
            text: text.to_string(),
            voice: None,
            rate,
            pitch: 1.0,
            volume: 0.9,
        }
    }

    #[test]
    fn test_speaking_time_scales_with_rate() {
        let normal = speaking_time("one two three", 1.0);
        let fast = speaking_time("one two three", 2.0);
        assert_eq!(normal, Duration::from_millis(990));
        assert_eq!(fast, Duration::from_millis(495));
        assert_eq!(speaking_time("", 1.0), Duration::ZERO);
    }

    #[test]
    fn test_voices_include_a_default_pick() {
        let synth = ConsoleSynthesizer::new();
        let voices = synth.voices();
        let pick = vemo_common::audio::select_default_voice(&voices).unwrap();
        assert_eq!(pick.name, "Daniel");
    }

    #[tokio::test]
    async fn test_cancel_cuts_sentence_short() {
        let synth = std::sync::Arc::new(ConsoleSynthesizer::new());
        let speaker = synth.clone();
        let task = tokio::spawn(async move {
            let long = "word ".repeat(200);
            speaker.speak(&utterance(&long, 0.5)).await
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        synth.cancel();
        let result = tokio::time::timeout(Duration::from_secs(2), task).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_instant_mode_does_not_wait() {
        let synth = ConsoleSynthesizer::instant();
        let result = tokio::time::timeout(
            Duration::from_millis(200),
            synth.speak(&utterance(&"word ".repeat(100), 1.0)),
        )
        .await;
        assert!(result.is_ok());
    }
}
