//! Audio Service
//!
//! Sequential, cancelable playback of normalized sentences through an
//! injected [`SpeechSynthesizer`]. The service owns at most one speech
//! sequence at a time: starting a new one cancels the previous one first, and
//! [`AudioService::stop`] guarantees no further sentence is dispatched.
//!
//! ## Usage
//!
//! Production callers inject a real backend (vemoctl renders to the console).
//! Tests inject a recording fake.

use crate::config::{clamp_multiplier, VoiceConfig, DEFAULT_VOLUME};
use crate::error::{Result, VemoError};
use crate::pacing::{pace, Paced};
use crate::speech_normalizer::normalize;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Default pause between sentences
pub const DEFAULT_SENTENCE_GAP: Duration = Duration::from_millis(100);

/// Played by "test voice" so the current settings can be heard
pub const VOICE_TEST_PHRASE: &str = "Hello. This is a voice synthesis test using your current configuration settings. Audio quality and clarity should be optimal for professional communication.";

/// A voice offered by the synthesis backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

impl VoiceInfo {
    pub fn new(name: &str, lang: &str) -> Self {
        Self {
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }
}

/// One sentence ready for synthesis
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<String>,
    pub rate: f64,
    pub pitch: f64,
    pub volume: f64,
}

/// Speech synthesis backend
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Voices the backend can use
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Speak one sentence, resolving once it has been rendered
    async fn speak(&self, utterance: &Utterance) -> Result<()>;

    /// Abort whatever the backend is currently rendering
    fn cancel(&self);
}

/// User-adjustable voice parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub voice: Option<String>,
    pub rate: f64,
    pub pitch: f64,
    pub volume: f64,
}

impl VoiceSettings {
    pub fn from_config(config: &VoiceConfig) -> Self {
        Self {
            voice: config.voice.clone(),
            rate: config.effective_rate(),
            pitch: config.effective_pitch(),
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::from_config(&VoiceConfig::default())
    }
}

/// Name fragments tried in order when no voice was chosen
const VOICE_NAME_TIERS: &[&[&str]] = &[
    &["David", "Mark", "Daniel", "Male", "Guy"],
    &["Google UK English Male", "Microsoft David", "Alex"],
    &["Natural", "Neural", "Premium"],
];

const VOICE_LANG_FALLBACK: &[&str] = &["en-US", "en-GB"];

/// Pick the default voice: a professional male voice if one exists, then a
/// natural-sounding one, then any English voice, then the first voice.
pub fn select_default_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    VOICE_NAME_TIERS
        .iter()
        .find_map(|tier| {
            voices
                .iter()
                .find(|v| tier.iter().any(|fragment| v.name.contains(fragment)))
        })
        .or_else(|| {
            voices
                .iter()
                .find(|v| VOICE_LANG_FALLBACK.iter().any(|lang| v.lang.contains(lang)))
        })
        .or_else(|| voices.first())
}

/// How a speech sequence ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackOutcome {
    Completed,
    Cancelled,
    Failed,
}

/// Handle to one in-flight speech sequence
pub struct SpeechHandle {
    token: CancellationToken,
    task: JoinHandle<PlaybackOutcome>,
    sentences: usize,
}

impl SpeechHandle {
    /// Number of sentences queued for this sequence
    pub fn sentence_count(&self) -> usize {
        self.sentences
    }

    /// Cancel this sequence only
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the sequence to end
    pub async fn wait(self) -> PlaybackOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => PlaybackOutcome::Cancelled,
            Err(e) => {
                warn!("Speech task panicked: {}", e);
                PlaybackOutcome::Failed
            }
        }
    }
}

/// Owns the synthesizer and the single active speech sequence
pub struct AudioService {
    synth: Arc<dyn SpeechSynthesizer>,
    settings: Mutex<VoiceSettings>,
    sentence_gap: Duration,
    current: Mutex<Option<CancellationToken>>,
    /// Bumped on every speak; only the newest sequence may clear `speaking`
    generation: Arc<AtomicU64>,
    speaking: Arc<AtomicBool>,
    closed: AtomicBool,
}

impl AudioService {
    pub fn new(synth: Arc<dyn SpeechSynthesizer>, settings: VoiceSettings) -> Self {
        Self {
            synth,
            settings: Mutex::new(settings),
            sentence_gap: DEFAULT_SENTENCE_GAP,
            current: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
            speaking: Arc::new(AtomicBool::new(false)),
            closed: AtomicBool::new(false),
        }
    }

    pub fn with_sentence_gap(mut self, gap: Duration) -> Self {
        self.sentence_gap = gap;
        self
    }

    pub fn voices(&self) -> Vec<VoiceInfo> {
        self.synth.voices()
    }

    pub fn settings(&self) -> VoiceSettings {
        lock(&self.settings).clone()
    }

    /// Set the rate multiplier, returning the clamped value actually applied
    pub fn set_rate(&self, rate: f64) -> f64 {
        let rate = clamp_multiplier(rate);
        lock(&self.settings).rate = rate;
        rate
    }

    /// Set the pitch multiplier, returning the clamped value actually applied
    pub fn set_pitch(&self, pitch: f64) -> f64 {
        let pitch = clamp_multiplier(pitch);
        lock(&self.settings).pitch = pitch;
        pitch
    }

    /// Choose a voice by exact name. `None` returns to automatic selection.
    pub fn set_voice(&self, name: Option<&str>) -> Result<()> {
        if let Some(name) = name {
            if !self.voices().iter().any(|v| v.name == name) {
                return Err(VemoError::VoiceUnavailable(name.to_string()));
            }
        }
        lock(&self.settings).voice = name.map(str::to_string);
        Ok(())
    }

    /// Back to default rate, pitch and automatic voice
    pub fn reset_settings(&self) {
        let mut settings = lock(&self.settings);
        *settings = VoiceSettings {
            volume: settings.volume,
            ..VoiceSettings::default()
        };
    }

    /// Voice name used for the next sequence
    pub fn effective_voice(&self) -> Option<String> {
        let chosen = lock(&self.settings).voice.clone();
        chosen.or_else(|| select_default_voice(&self.voices()).map(|v| v.name.clone()))
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    /// Normalize `text` and play it sentence by sentence. Any sequence
    /// already playing is cancelled first. Must be called inside a tokio
    /// runtime.
    pub fn speak(&self, text: &str) -> SpeechHandle {
        self.cancel_current();

        let token = CancellationToken::new();
        if self.closed.load(Ordering::SeqCst) {
            debug!("Audio service closed, dropping speech request");
            token.cancel();
            return SpeechHandle {
                token,
                task: tokio::spawn(async { PlaybackOutcome::Cancelled }),
                sentences: 0,
            };
        }

        let sentences = normalize(text);
        let count = sentences.len();
        *lock(&self.current) = Some(token.clone());

        let settings = self.settings();
        let voice = self.effective_voice();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current_generation = Arc::clone(&self.generation);
        let speaking = Arc::clone(&self.speaking);
        let synth = Arc::clone(&self.synth);
        let gap = self.sentence_gap;
        let task_token = token.clone();

        if count > 0 {
            speaking.store(true, Ordering::SeqCst);
            info!("Speaking {} sentence(s)", count);
        }

        let task = tokio::spawn(async move {
            let mut outcome = PlaybackOutcome::Completed;

            for (index, text) in sentences.into_iter().enumerate() {
                if index > 0 && pace(gap, &task_token).await == Paced::Cancelled {
                    outcome = PlaybackOutcome::Cancelled;
                    break;
                }
                if task_token.is_cancelled() {
                    outcome = PlaybackOutcome::Cancelled;
                    break;
                }

                let utterance = Utterance {
                    text,
                    voice: voice.clone(),
                    rate: settings.rate,
                    pitch: settings.pitch,
                    volume: settings.volume,
                };

                let result = tokio::select! {
                    biased;
                    _ = task_token.cancelled() => None,
                    result = synth.speak(&utterance) => Some(result),
                };

                match result {
                    None => {
                        outcome = PlaybackOutcome::Cancelled;
                        break;
                    }
                    Some(Err(e)) if e.is_audio() => {
                        warn!("Speech synthesis failed at sentence {}: {} [{}]", index + 1, e, e.code());
                        outcome = PlaybackOutcome::Failed;
                        break;
                    }
                    Some(Err(e)) => {
                        error!("Speech backend error at sentence {}: {} [{}]", index + 1, e, e.code());
                        outcome = PlaybackOutcome::Failed;
                        break;
                    }
                    Some(Ok(())) => {}
                }
            }

            if current_generation.load(Ordering::SeqCst) == generation {
                speaking.store(false, Ordering::SeqCst);
            }
            debug!("Speech sequence {} ended: {:?}", generation, outcome);
            outcome
        });

        SpeechHandle {
            token,
            task,
            sentences: count,
        }
    }

    /// Stop playback. No further sentence of the current sequence is
    /// dispatched after this returns.
    pub fn stop(&self) {
        let was_speaking = self.is_speaking();
        self.cancel_current();
        if was_speaking {
            info!("Speech stopped");
        }
    }

    /// Stop playback and refuse further requests
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.stop();
        debug!("Audio service shut down");
    }

    fn cancel_current(&self) {
        if let Some(token) = lock(&self.current).take() {
            token.cancel();
        }
        self.synth.cancel();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.speaking.store(false, Ordering::SeqCst);
    }
}

impl Drop for AudioService {
    fn drop(&mut self) {
        if let Some(token) = lock(&self.current).take() {
            token.cancel();
        }
    }
}

/// Lock ignoring poisoning; the guarded data stays consistent on panic
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
