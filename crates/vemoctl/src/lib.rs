//! vemoctl library - exposes the CLI pieces for integration tests

pub mod commands;
pub mod console_voice;
pub mod display;
pub mod logging;
pub mod repl;
pub mod spinner;

/// Version embedded at build time
pub const VERSION: &str = env!("VEMO_VERSION");
