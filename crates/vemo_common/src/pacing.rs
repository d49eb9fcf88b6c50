//! Reply pacing
//!
//! Replies are shown after a short "thinking" pause proportional to their
//! length, and actions after their simulated execution time. Every pause is a
//! cancelable tokio timer, never a blocking sleep.

use crate::config::ChatConfig;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Length-proportional, capped thinking delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    per_char: Duration,
    cap: Duration,
}

impl ThinkingDelay {
    pub fn new(per_char_ms: u64, cap_ms: u64) -> Self {
        Self {
            per_char: Duration::from_millis(per_char_ms),
            cap: Duration::from_millis(cap_ms),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.thinking_ms_per_char, config.thinking_cap_ms)
    }

    /// No pause at all (tests, one-shot CLI)
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    pub fn for_text(&self, text: &str) -> Duration {
        let chars = text.chars().count() as u32;
        self.per_char.saturating_mul(chars).min(self.cap)
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

/// How a pause ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paced {
    Elapsed,
    Cancelled,
}

/// Wait for `delay` unless `cancel` fires first
pub async fn pace(delay: Duration, cancel: &CancellationToken) -> Paced {
    if cancel.is_cancelled() {
        return Paced::Cancelled;
    }
    if delay.is_zero() {
        return Paced::Elapsed;
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Paced::Cancelled,
        _ = tokio::time::sleep(delay) => Paced::Elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_delay_scales_and_caps() {
        let delay = ThinkingDelay::default();
        assert_eq!(delay.for_text("abcd"), Duration::from_millis(140));
        assert_eq!(delay.for_text(&"x".repeat(500)), Duration::from_millis(2000));
        assert_eq!(delay.for_text(""), Duration::ZERO);
        assert_eq!(ThinkingDelay::none().for_text("hello"), Duration::ZERO);
    }

    #[test]
    fn test_thinking_delay_counts_chars_not_bytes() {
        let delay = ThinkingDelay::new(10, 10_000);
        assert_eq!(delay.for_text("🚀🚀"), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_pace_elapses() {
        let token = CancellationToken::new();
        assert_eq!(pace(Duration::from_millis(5), &token).await, Paced::Elapsed);
        assert_eq!(pace(Duration::ZERO, &token).await, Paced::Elapsed);
    }

    #[tokio::test]
    async fn test_pace_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(pace(Duration::ZERO, &token).await, Paced::Cancelled);
    }

    #[tokio::test]
    async fn test_pace_cancelled_midway() {
        let token = CancellationToken::new();
        let child = token.clone();
        let waiter = tokio::spawn(async move { pace(Duration::from_secs(30), &child).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();
        assert_eq!(waiter.await.unwrap(), Paced::Cancelled);
    }
}
