//! Terminal spinner shown while Vemo is "thinking" or running an action
//!
//! Falls back to a single plain line when stdout is not a TTY.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Braille spinner frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const SPINNER_INTERVAL_MS: u64 = 120;

pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
    start_time: Instant,
    is_tty: bool,
}

impl Spinner {
    /// Start a spinner with a message
    pub fn new(message: &str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let is_tty = io::stdout().is_terminal();

        if !is_tty {
            println!("{}", plain_line(message));
            return Self {
                running,
                handle: None,
                start_time: Instant::now(),
                is_tty,
            };
        }

        let running_clone = running.clone();
        let message = message.to_string();
        let handle = std::thread::spawn(move || {
            let mut frame = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!(
                    "\r{}  {} {}",
                    "[vemo]".bright_cyan(),
                    SPINNER_FRAMES[frame].bright_yellow(),
                    message.dimmed()
                );
                let _ = io::stdout().flush();
                frame = (frame + 1) % SPINNER_FRAMES.len();
                std::thread::sleep(Duration::from_millis(SPINNER_INTERVAL_MS));
            }
        });

        Self {
            running,
            handle: Some(handle),
            start_time: Instant::now(),
            is_tty,
        }
    }

    /// Stop and clear the spinner line, returning elapsed time
    pub fn stop(mut self) -> Duration {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        if self.is_tty {
            print!("\r{}\r", " ".repeat(60));
            let _ = io::stdout().flush();
        }
        self.start_time.elapsed()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Uncolored, unanimated status line for pipes and logs
fn plain_line(message: &str) -> String {
    format!("[vemo] {}", message)
}

/// Echo what the user typed or clicked
pub fn print_user(text: &str) {
    println!("{}  {}", "[you]".bright_green(), text.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        assert_eq!(plain_line("Executing..."), "[vemo] Executing...");
    }
}
