//! Chat session
//!
//! The glue a chat front end needs around the classifier: conversation
//! context, transcript, thinking-delay pacing and speak-after-reply. One
//! session per conversation; nothing outlives it.

use crate::action_results::ActionOutcome;
use crate::actions::button_label;
use crate::audio::AudioService;
use crate::classifier::Classifier;
use crate::config::VemoConfig;
use crate::context::ConversationContext;
use crate::error::Result;
use crate::pacing::{pace, Paced, ThinkingDelay};
use crate::reply::Reply;
use crate::suggestions::QUICK_SUGGESTIONS;
use crate::transcript::{export_file_name, Message, Transcript};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Pause before a regenerated reply appears
pub const REGENERATE_DELAY: Duration = Duration::from_millis(500);

/// Processing time reported on regenerated replies
pub const REGENERATE_PROCESSING_TIME: Duration = Duration::from_millis(1500);

pub struct ChatSession {
    config: VemoConfig,
    classifier: Classifier,
    context: ConversationContext,
    transcript: Transcript,
    audio: Option<Arc<AudioService>>,
    voice_enabled: bool,
    pacing: bool,
    quick_suggestions: Vec<String>,
    /// Cancels thinking/execution pauses
    pending: CancellationToken,
    /// Cancels speech scheduled but not yet started
    scheduled: CancellationToken,
}

impl ChatSession {
    pub fn new(config: VemoConfig) -> Self {
        let classifier = Classifier::new(ThinkingDelay::from_config(&config.chat));
        Self::with_classifier(config, classifier)
    }

    pub fn with_classifier(config: VemoConfig, classifier: Classifier) -> Self {
        Self {
            context: ConversationContext::new(config.chat.effective_context_capacity()),
            voice_enabled: config.voice.enabled,
            config,
            classifier,
            transcript: Transcript::new(),
            audio: None,
            pacing: true,
            quick_suggestions: QUICK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            pending: CancellationToken::new(),
            scheduled: CancellationToken::new(),
        }
    }

    pub fn with_audio(mut self, audio: Arc<AudioService>) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Skip thinking and execution pauses. Reported processing times are
    /// unchanged.
    pub fn without_pacing(mut self) -> Self {
        self.pacing = false;
        self
    }

    pub fn config(&self) -> &VemoConfig {
        &self.config
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn audio(&self) -> Option<&Arc<AudioService>> {
        self.audio.as_ref()
    }

    pub fn context_len(&self) -> usize {
        self.context.len()
    }

    pub fn quick_suggestions(&self) -> &[String] {
        &self.quick_suggestions
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// Turning voice off also silences anything playing
    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.voice_enabled = enabled;
        if !enabled {
            self.stop_speaking();
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.audio.as_ref().is_some_and(|a| a.is_speaking())
    }

    /// Token a caller can cancel to cut the current pause short
    pub fn pending_token(&self) -> CancellationToken {
        self.pending.clone()
    }

    /// Abort the current thinking or execution pause. While idle, this
    /// cuts the next pause instead.
    pub fn cancel_pending(&self) {
        self.pending.cancel();
    }

    /// Answer a typed message. Blank input is ignored. Returns `None` when
    /// the pause was cancelled; the user message stays in the transcript.
    pub async fn respond(&mut self, input: &str) -> Option<Reply> {
        if input.trim().is_empty() {
            return None;
        }
        self.context.push(input);
        self.transcript.push(Message::user(input));

        let reply = self.classifier.classify(input);
        if self.wait(reply.processing_time).await == Paced::Cancelled {
            debug!("Reply cancelled during thinking pause");
            return None;
        }

        self.transcript.push(Message::from_reply(&reply));
        self.quick_suggestions = reply.suggestions.clone();
        self.speak_later(&reply.text, self.config.chat.speak_delay());
        Some(reply)
    }

    /// Run an action button. `label` defaults to the button's own label.
    pub async fn invoke_action(&mut self, action_id: &str, label: Option<&str>) -> Option<ActionOutcome> {
        let label = label.or_else(|| button_label(action_id)).unwrap_or(action_id);
        self.transcript.push(Message::user(format!("🔧 {}", label)));

        let outcome = ActionOutcome::for_action(action_id);
        debug!(action = action_id, "executing action for {:?}", outcome.processing_time);
        if self.wait(outcome.processing_time).await == Paced::Cancelled {
            debug!("Action {} cancelled", action_id);
            return None;
        }

        self.transcript.push(Message::from_outcome(&outcome));
        self.speak_later(&outcome.text, Duration::ZERO);
        Some(outcome)
    }

    /// Classify the last user message again, replacing the latest reply.
    /// A cancelled pause leaves the transcript untouched.
    pub async fn regenerate(&mut self) -> Option<Reply> {
        if self.transcript.len() <= 1 {
            return None;
        }
        let last_input = self.transcript.last_user()?.content.clone();

        if self.wait(REGENERATE_DELAY).await == Paced::Cancelled {
            debug!("Regenerate cancelled");
            return None;
        }
        self.transcript.pop_last_vemo();

        let reply = Reply {
            processing_time: REGENERATE_PROCESSING_TIME,
            ..self.classifier.classify(&last_input)
        };
        self.transcript.push(Message::from_reply(&reply));
        self.speak_later(&reply.text, Duration::ZERO);
        Some(reply)
    }

    /// Back to the welcome message with an empty context
    pub fn clear(&mut self) {
        self.transcript.reset();
        self.context.clear();
        self.quick_suggestions = QUICK_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        debug!("Conversation cleared");
    }

    /// Text of the latest assistant reply, for copying
    pub fn last_reply_text(&self) -> Option<&str> {
        self.transcript.last_vemo().map(|m| m.content.as_str())
    }

    pub fn export(&self) -> String {
        self.transcript.export_text()
    }

    /// File name for today's export
    pub fn export_file_name(&self) -> String {
        export_file_name(Local::now().date_naive())
    }

    /// Write the export. A directory target gets today's file name.
    pub fn save_export(&self, target: &Path) -> Result<PathBuf> {
        let path = if target.is_dir() {
            target.join(self.export_file_name())
        } else {
            target.to_path_buf()
        };
        fs::write(&path, self.export())?;
        info!("Exported {} messages to {}", self.transcript.len(), path.display());
        Ok(path)
    }

    /// Speak arbitrary text now. Returns false when voice is off or there is
    /// no audio service. Must run inside a tokio runtime.
    pub fn speak(&self, text: &str) -> bool {
        match self.active_audio() {
            Some(audio) => {
                audio.speak(text);
                true
            }
            None => false,
        }
    }

    /// Stop playback and drop any speech scheduled but not yet started
    pub fn stop_speaking(&mut self) {
        self.scheduled.cancel();
        self.scheduled = CancellationToken::new();
        if let Some(audio) = &self.audio {
            audio.stop();
        }
    }

    /// End of session: stop everything and release the audio service
    pub fn shutdown(&mut self) {
        self.pending.cancel();
        self.scheduled.cancel();
        if let Some(audio) = self.audio.take() {
            audio.shutdown();
        }
    }

    fn active_audio(&self) -> Option<Arc<AudioService>> {
        if self.voice_enabled {
            self.audio.clone()
        } else {
            None
        }
    }

    fn speak_later(&self, text: &str, delay: Duration) {
        let Some(audio) = self.active_audio() else {
            return;
        };
        if delay.is_zero() {
            audio.speak(text);
            return;
        }

        let text = text.to_string();
        let token = self.scheduled.clone();
        tokio::spawn(async move {
            if pace(delay, &token).await == Paced::Elapsed {
                audio.speak(&text);
            }
        });
    }

    /// A cancelled token is replaced so the next request starts clean
    async fn wait(&mut self, delay: Duration) -> Paced {
        if !self.pacing {
            return Paced::Elapsed;
        }
        let paced = pace(delay, &self.pending).await;
        if paced == Paced::Cancelled {
            self.pending = CancellationToken::new();
        }
        paced
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.scheduled.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentCategory;
    use crate::transcript::{MessageKind, WELCOME_MESSAGE};

    fn session() -> ChatSession {
        let classifier = Classifier::seeded(3, ThinkingDelay::default());
        ChatSession::with_classifier(VemoConfig::default(), classifier).without_pacing()
    }

    #[tokio::test]
    async fn test_respond_records_both_sides() {
        let mut s = session();
        let reply = s.respond("hello").await.unwrap();
        assert_eq!(reply.category, IntentCategory::Greeting);

        let messages = s.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].kind, MessageKind::User);
        assert_eq!(messages[2].content, reply.text);
        assert_eq!(s.context_len(), 1);
        assert_eq!(s.quick_suggestions()[0], "💬 Tell me about yourself");
    }

    #[tokio::test]
    async fn test_blank_input_ignored() {
        let mut s = session();
        assert!(s.respond("   ").await.is_none());
        assert_eq!(s.transcript().len(), 1);
        assert_eq!(s.context_len(), 0);
    }

    #[tokio::test]
    async fn test_context_bounded() {
        let mut s = session();
        for i in 0..7 {
            s.respond(&format!("message {}", i)).await;
        }
        assert_eq!(s.context_len(), 5);
    }

    #[tokio::test]
    async fn test_invoke_action() {
        let mut s = session();
        let outcome = s.invoke_action("status", None).await.unwrap();
        assert_eq!(outcome.processing_time, Duration::from_millis(1500));
        assert_eq!(outcome.confidence, 0.95);

        let messages = s.transcript().messages();
        assert_eq!(messages[1].content, "🔧 📊 Network Status");
        assert_eq!(messages[2].kind, MessageKind::System);
        assert_eq!(messages[2].actions.len(), 2);
    }

    #[tokio::test]
    async fn test_regenerate_replaces_last_reply() {
        let mut s = session();
        s.respond("show device inventory").await.unwrap();
        let before = s.transcript().len();

        let reply = s.regenerate().await.unwrap();
        assert_eq!(reply.category, IntentCategory::Devices);
        assert_eq!(reply.processing_time, REGENERATE_PROCESSING_TIME);
        assert_eq!(s.transcript().len(), before);
    }

    #[tokio::test]
    async fn test_regenerate_without_history() {
        let mut s = session();
        assert!(s.regenerate().await.is_none());
        assert_eq!(s.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let mut s = session();
        s.respond("hello").await;
        s.respond("status").await;
        s.clear();
        assert_eq!(s.transcript().len(), 1);
        assert_eq!(s.context_len(), 0);
        assert_eq!(s.last_reply_text(), Some(WELCOME_MESSAGE));
    }

    #[tokio::test]
    async fn test_cancelled_thinking_pause() {
        let classifier = Classifier::seeded(3, ThinkingDelay::new(1000, 60_000));
        let mut s = ChatSession::with_classifier(VemoConfig::default(), classifier);

        let token = s.pending_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let reply = tokio::time::timeout(Duration::from_secs(5), s.respond("hello"))
            .await
            .unwrap();
        assert!(reply.is_none());
        assert_eq!(s.transcript().len(), 2);
        assert!(!s.pending_token().is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_regenerate_keeps_reply() {
        let classifier = Classifier::seeded(3, ThinkingDelay::none());
        let mut s = ChatSession::with_classifier(VemoConfig::default(), classifier);
        let reply = s.respond("hello").await.unwrap();
        assert_eq!(s.transcript().len(), 3);

        let token = s.pending_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let regenerated = tokio::time::timeout(Duration::from_secs(5), s.regenerate())
            .await
            .unwrap();
        assert!(regenerated.is_none());

        let kinds: Vec<MessageKind> = s.transcript().messages().iter().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MessageKind::Vemo, MessageKind::User, MessageKind::Vemo]);
        assert_eq!(s.last_reply_text(), Some(reply.text.as_str()));
        assert!(!s.pending_token().is_cancelled());
    }

    #[tokio::test]
    async fn test_save_export_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session();
        s.respond("hello").await;

        let path = s.save_export(dir.path()).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("vemo-conversation-"));
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("USER: hello"));
    }
}
