//! Vemo Common - core of the Vemo network assistant
//!
//! Scripted intent classification, speech normalization, action results and
//! cancelable speech playback. No real network is touched: every answer is a
//! canned response chosen by keyword.

pub mod action_results;
pub mod actions;
pub mod audio;
pub mod classifier;
pub mod config;
pub mod context;
pub mod error;
pub mod intent;
pub mod pacing;
pub mod reply;
pub mod session;
pub mod speech_normalizer;
pub mod suggestions;
pub mod transcript;

pub use action_results::{resolve_action, ActionOutcome};
pub use actions::{response_actions, ActionButton};
pub use audio::{AudioService, PlaybackOutcome, SpeechHandle, SpeechSynthesizer, Utterance, VoiceInfo, VoiceSettings};
pub use classifier::{classify_category, Classifier};
pub use config::VemoConfig;
pub use context::ConversationContext;
pub use error::{Result, VemoError};
pub use intent::IntentCategory;
pub use pacing::{pace, Paced, ThinkingDelay};
pub use reply::Reply;
pub use session::ChatSession;
pub use speech_normalizer::normalize;
pub use transcript::{Message, MessageKind, Transcript};

/// Crate version, shared by vemoctl's `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
