//! One-shot subcommands: ask, action, speak, config

use crate::console_voice::ConsoleSynthesizer;
use crate::display;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use vemo_common::action_results::{is_known_action, ActionOutcome};
use vemo_common::config::resolve_config_path;
use vemo_common::{normalize, AudioService, Classifier, PlaybackOutcome, ThinkingDelay, VemoConfig, VoiceSettings};

/// Classify one utterance and print the reply
pub fn ask(config: &VemoConfig, text: &str, json: bool, seed: Option<u64>) -> Result<()> {
    let thinking = ThinkingDelay::from_config(&config.chat);
    let mut classifier = match seed {
        Some(seed) => Classifier::seeded(seed, thinking),
        None => Classifier::new(thinking),
    };

    let reply = classifier.classify(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&reply).context("serializing reply")?);
    } else {
        display::print_reply(&reply);
    }
    Ok(())
}

/// Run one action lookup and print the result
pub fn action(action_id: &str, json: bool) -> Result<()> {
    if !is_known_action(action_id) {
        debug!("Unknown action id '{}', using generic result", action_id);
    }

    let outcome = ActionOutcome::for_action(action_id);
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome).context("serializing action result")?);
    } else {
        display::print_outcome(&outcome);
    }
    Ok(())
}

/// Normalize text and play it, or just list the sentences with `--dry-run`
pub async fn speak(config: &VemoConfig, text: &str, dry_run: bool) -> Result<()> {
    if dry_run || !config.voice.enabled {
        for (i, sentence) in normalize(text).iter().enumerate() {
            println!("{} {}", format!("{:>2}.", i + 1).bright_yellow(), sentence);
        }
        return Ok(());
    }

    let audio = AudioService::new(
        Arc::new(ConsoleSynthesizer::new()),
        VoiceSettings::from_config(&config.voice),
    )
    .with_sentence_gap(config.chat.sentence_gap());

    let handle = audio.speak(text);
    let outcome = tokio::select! {
        outcome = handle.wait() => outcome,
        _ = tokio::signal::ctrl_c() => {
            audio.stop();
            PlaybackOutcome::Cancelled
        }
    };
    audio.shutdown();

    match outcome {
        PlaybackOutcome::Completed => Ok(()),
        PlaybackOutcome::Cancelled => {
            display::print_info("Speech stopped.");
            Ok(())
        }
        PlaybackOutcome::Failed => anyhow::bail!("speech playback failed"),
    }
}

/// Print the effective configuration as TOML
pub fn config(config: &VemoConfig, explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = resolve_config_path(explicit) {
        let state = if path.exists() { "loaded" } else { "not found, defaults" };
        println!("# {} ({})", path.display(), state);
    }
    print!("{}", config.to_toml().context("rendering config")?);
    Ok(())
}
