//! Interactive chat REPL
//!
//! Plain lines go to the assistant; lines starting with `/` are commands.
//! Ctrl-C cuts a pause or speech short, `/quit` or EOF exits.

use crate::console_voice::ConsoleSynthesizer;
use crate::display;
use crate::spinner::{print_user, Spinner};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use vemo_common::audio::VOICE_TEST_PHRASE;
use vemo_common::{ActionButton, AudioService, ChatSession, Classifier, ThinkingDelay, VemoConfig, VoiceSettings};

const HELP: &str = "\
Commands:
  /help                 show this help
  /action <id|number>   run an action button (number from the last list)
  /clear                start over
  /export [path]        save the conversation (directory or file)
  /regenerate           answer the last message again
  /last                 repeat the last reply
  /stop                 stop speaking
  /voice on|off|reset   toggle voice, or reset rate/pitch/voice
  /voice test           play a sample with the current settings
  /voice <name>         pick a voice (see /voices)
  /voices               list available voices
  /rate <0.5-2.0>       speech rate
  /pitch <0.5-2.0>      speech pitch
  /quit                 exit";

/// Parsed slash command
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Action(String),
    Clear,
    Export(Option<PathBuf>),
    Regenerate,
    Last,
    Stop,
    Voice(VoiceToggle),
    Voices,
    Rate(f64),
    Pitch(f64),
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VoiceToggle {
    On,
    Off,
    Reset,
    Test,
    Named(String),
}

impl ReplCommand {
    /// Parse a `/command` line. `None` for ordinary chat input.
    pub fn parse(line: &str) -> Option<std::result::Result<Self, String>> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let parsed = match (name, arg) {
            ("help" | "h" | "?", _) => Ok(Self::Help),
            ("action" | "a", "") => Err("usage: /action <id|number>".to_string()),
            ("action" | "a", id) => Ok(Self::Action(id.to_string())),
            ("clear", _) => Ok(Self::Clear),
            ("export", "") => Ok(Self::Export(None)),
            ("export", path) => Ok(Self::Export(Some(PathBuf::from(path)))),
            ("regenerate" | "regen", _) => Ok(Self::Regenerate),
            ("last" | "copy", _) => Ok(Self::Last),
            ("stop", _) => Ok(Self::Stop),
            ("voice", "on") => Ok(Self::Voice(VoiceToggle::On)),
            ("voice", "off") => Ok(Self::Voice(VoiceToggle::Off)),
            ("voice", "reset") => Ok(Self::Voice(VoiceToggle::Reset)),
            ("voice", "test") => Ok(Self::Voice(VoiceToggle::Test)),
            ("voice", "") => Err("usage: /voice on|off|reset|<name>".to_string()),
            ("voice", name) => Ok(Self::Voice(VoiceToggle::Named(name.to_string()))),
            ("voices", _) => Ok(Self::Voices),
            ("rate", value) => parse_multiplier(value).map(Self::Rate),
            ("pitch", value) => parse_multiplier(value).map(Self::Pitch),
            ("quit" | "exit" | "q", _) => Ok(Self::Quit),
            (other, _) => Err(format!("unknown command '/{}', try /help", other)),
        };
        Some(parsed)
    }
}

fn parse_multiplier(value: &str) -> std::result::Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("expected a number between 0.5 and 2.0, got '{}'", value))
}

/// Resolve `/action` input: a 1-based index into the last buttons shown, or an id
pub fn resolve_action_arg<'a>(arg: &'a str, buttons: &'a [ActionButton]) -> (&'a str, Option<&'a str>) {
    if let Ok(n) = arg.parse::<usize>() {
        if let Some(button) = n.checked_sub(1).and_then(|i| buttons.get(i)) {
            return (button.action_id.as_str(), Some(button.label.as_str()));
        }
    }
    match buttons.iter().find(|b| b.action_id == arg) {
        Some(button) => (button.action_id.as_str(), Some(button.label.as_str())),
        None => (arg, None),
    }
}

pub struct Repl {
    session: ChatSession,
    audio: Arc<AudioService>,
    buttons: Vec<ActionButton>,
}

impl Repl {
    pub fn new(config: VemoConfig, seed: Option<u64>, instant_voice: bool) -> Self {
        let synth = if instant_voice {
            ConsoleSynthesizer::instant()
        } else {
            ConsoleSynthesizer::new()
        };
        let audio = Arc::new(
            AudioService::new(Arc::new(synth), VoiceSettings::from_config(&config.voice))
                .with_sentence_gap(config.chat.sentence_gap()),
        );

        let thinking = ThinkingDelay::from_config(&config.chat);
        let classifier = match seed {
            Some(seed) => Classifier::seeded(seed, thinking),
            None => Classifier::new(thinking),
        };
        let session = ChatSession::with_classifier(config, classifier).with_audio(audio.clone());

        Self {
            session,
            audio,
            buttons: Vec::new(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        println!(
            "{} {}",
            "Vemo".bright_cyan().bold(),
            format!("v{} · type /help for commands", env!("VEMO_VERSION")).dimmed()
        );
        println!();

        if let Some(welcome) = self.session.transcript().last() {
            display::print_message(welcome);
            self.buttons = welcome.actions.clone();
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            prompt(self.session.context_len());

            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    self.session.stop_speaking();
                    display::print_info("(use /quit to exit)");
                    continue;
                }
            };

            let Some(line) = line else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match ReplCommand::parse(line) {
                None => self.chat(line).await,
                Some(Ok(ReplCommand::Quit)) => break,
                Some(Ok(command)) => self.handle(command).await,
                Some(Err(message)) => display::print_error(&message),
            }
        }

        self.session.shutdown();
        println!("{}", "Goodbye.".dimmed());
        Ok(())
    }

    async fn chat(&mut self, line: &str) {
        let spinner = Spinner::new("Vemo is thinking...");
        let watcher = self.cancel_on_ctrl_c();
        let reply = self.session.respond(line).await;
        watcher.abort();
        spinner.stop();

        match reply {
            Some(reply) => {
                self.buttons = reply.actions.clone();
                display::print_reply(&reply);
            }
            None => display::print_info("(cancelled)"),
        }
    }

    async fn handle(&mut self, command: ReplCommand) {
        match command {
            ReplCommand::Help => println!("{}", HELP),
            ReplCommand::Action(arg) => self.run_action(&arg).await,
            ReplCommand::Clear => {
                self.session.clear();
                if let Some(welcome) = self.session.transcript().last() {
                    display::print_message(welcome);
                    self.buttons = welcome.actions.clone();
                }
            }
            ReplCommand::Export(target) => {
                let target = target.unwrap_or_else(|| PathBuf::from("."));
                match self.session.save_export(&target) {
                    Ok(path) => display::print_info(&format!("Saved {}", path.display())),
                    Err(e) => display::print_error(&format!("export failed: {}", e)),
                }
            }
            ReplCommand::Regenerate => {
                if self.session.transcript().last_user().is_none() {
                    display::print_info("Nothing to regenerate.");
                    return;
                }
                let spinner = Spinner::new("Vemo is reconsidering...");
                let watcher = self.cancel_on_ctrl_c();
                let reply = self.session.regenerate().await;
                watcher.abort();
                spinner.stop();
                match reply {
                    Some(reply) => {
                        self.buttons = reply.actions.clone();
                        display::print_reply(&reply);
                    }
                    None => display::print_info("(cancelled)"),
                }
            }
            ReplCommand::Last => match self.session.last_reply_text() {
                Some(text) => println!("{}", text),
                None => display::print_info("No reply yet."),
            },
            ReplCommand::Stop => self.session.stop_speaking(),
            ReplCommand::Voice(toggle) => self.voice(toggle),
            ReplCommand::Voices => {
                let current = self.audio.effective_voice();
                for voice in self.audio.voices() {
                    let marker = if current.as_deref() == Some(voice.name.as_str()) { "*" } else { " " };
                    println!("  {} {} ({})", marker.bright_yellow(), voice.name, voice.lang.dimmed());
                }
            }
            ReplCommand::Rate(rate) => {
                let applied = self.audio.set_rate(rate);
                display::print_info(&format!("Speech rate {:.2}", applied));
            }
            ReplCommand::Pitch(pitch) => {
                let applied = self.audio.set_pitch(pitch);
                display::print_info(&format!("Speech pitch {:.2}", applied));
            }
            ReplCommand::Quit => {}
        }
    }

    async fn run_action(&mut self, arg: &str) {
        let (action_id, label) = resolve_action_arg(arg, &self.buttons);
        let (action_id, label) = (action_id.to_string(), label.map(str::to_string));
        print_user(&format!("🔧 {}", label.as_deref().unwrap_or(&action_id)));

        let spinner = Spinner::new("Executing...");
        let watcher = self.cancel_on_ctrl_c();
        let outcome = self.session.invoke_action(&action_id, label.as_deref()).await;
        watcher.abort();
        spinner.stop();

        match outcome {
            Some(outcome) => {
                self.buttons = outcome.follow_ups.clone();
                display::print_outcome(&outcome);
            }
            None => display::print_info("(cancelled)"),
        }
    }

    fn voice(&mut self, toggle: VoiceToggle) {
        match toggle {
            VoiceToggle::On => {
                self.session.set_voice_enabled(true);
                display::print_info("Voice on");
            }
            VoiceToggle::Off => {
                self.session.set_voice_enabled(false);
                display::print_info("Voice off");
            }
            VoiceToggle::Reset => {
                self.audio.reset_settings();
                let settings = self.audio.settings();
                display::print_info(&format!(
                    "Voice reset: rate {:.2}, pitch {:.2}, voice {}",
                    settings.rate,
                    settings.pitch,
                    self.audio.effective_voice().unwrap_or_else(|| "none".to_string())
                ));
            }
            VoiceToggle::Test => {
                if !self.session.speak(VOICE_TEST_PHRASE) {
                    display::print_info("Voice is off, try /voice on");
                }
            }
            VoiceToggle::Named(name) => match self.audio.set_voice(Some(&name)) {
                Ok(()) => display::print_info(&format!("Voice set to {}", name)),
                Err(e) => display::print_error(&e.to_string()),
            },
        }
    }

    /// Cancel the session's current pause when Ctrl-C arrives
    fn cancel_on_ctrl_c(&self) -> tokio::task::JoinHandle<()> {
        let token = self.session.pending_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("Ctrl-C during pause");
                token.cancel();
            }
        })
    }
}

fn prompt(context_len: usize) {
    print!("{} ", format!("[{}] ›", context_len).bright_green());
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(ReplCommand::parse("hello vemo").is_none());
        assert!(ReplCommand::parse("  what is /etc?").is_none());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("/help"), Some(Ok(ReplCommand::Help)));
        assert_eq!(
            ReplCommand::parse("/action security_scan"),
            Some(Ok(ReplCommand::Action("security_scan".into())))
        );
        assert_eq!(ReplCommand::parse("/export"), Some(Ok(ReplCommand::Export(None))));
        assert_eq!(
            ReplCommand::parse("/export /tmp/chat.txt"),
            Some(Ok(ReplCommand::Export(Some(PathBuf::from("/tmp/chat.txt")))))
        );
        assert_eq!(ReplCommand::parse("/voice off"), Some(Ok(ReplCommand::Voice(VoiceToggle::Off))));
        assert_eq!(ReplCommand::parse("/voice test"), Some(Ok(ReplCommand::Voice(VoiceToggle::Test))));
        assert_eq!(
            ReplCommand::parse("/voice Daniel"),
            Some(Ok(ReplCommand::Voice(VoiceToggle::Named("Daniel".into()))))
        );
        assert_eq!(ReplCommand::parse("/rate 1.25"), Some(Ok(ReplCommand::Rate(1.25))));
        assert_eq!(ReplCommand::parse("/quit"), Some(Ok(ReplCommand::Quit)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(ReplCommand::parse("/action"), Some(Err(_))));
        assert!(matches!(ReplCommand::parse("/rate fast"), Some(Err(_))));
        assert!(matches!(ReplCommand::parse("/pitch NaN"), Some(Err(_))));
        assert!(matches!(ReplCommand::parse("/dance"), Some(Err(_))));
    }

    #[test]
    fn test_resolve_action_arg() {
        let buttons = vec![
            ActionButton::new("📊 Network Status", "status", Some("📊")),
            ActionButton::new("🚀 Run Optimization", "optimize", Some("🚀")),
        ];
        assert_eq!(resolve_action_arg("2", &buttons), ("optimize", Some("🚀 Run Optimization")));
        assert_eq!(resolve_action_arg("status", &buttons), ("status", Some("📊 Network Status")));
        assert_eq!(resolve_action_arg("backup", &buttons), ("backup", None));
        assert_eq!(resolve_action_arg("9", &buttons), ("9", None));
        assert_eq!(resolve_action_arg("0", &buttons), ("0", None));
    }
}
