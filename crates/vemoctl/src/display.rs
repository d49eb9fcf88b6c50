//! Display helpers for vemoctl output

use owo_colors::OwoColorize;
use vemo_common::action_results::ActionOutcome;
use vemo_common::transcript::{Message, MessageKind};
use vemo_common::{ActionButton, Reply};

/// Print a reply with its buttons and follow-up suggestions
pub fn print_reply(reply: &Reply) {
    println!("{}  {}", "[vemo]".bright_cyan(), reply.text);
    println!(
        "        {}",
        format!(
            "{} · {}% confidence · {:.1}s",
            reply.category,
            reply.confidence_percent(),
            reply.processing_time.as_secs_f64()
        )
        .dimmed()
    );
    print_buttons(&reply.actions);
    print_suggestions(&reply.suggestions);
    println!();
}

/// Print an action result
pub fn print_outcome(outcome: &ActionOutcome) {
    println!("{}  {}", "[system]".bright_magenta(), outcome.text);
    println!(
        "          {}",
        format!(
            "{} · {:.0}% confidence · {:.1}s",
            outcome.action_id,
            outcome.confidence * 100.0,
            outcome.processing_time.as_secs_f64()
        )
        .dimmed()
    );
    print_buttons(&outcome.follow_ups);
    print_suggestions(&outcome.suggestions);
    println!();
}

/// Print a transcript message (used for the welcome message)
pub fn print_message(message: &Message) {
    let tag = match message.kind {
        MessageKind::User => "[you]".bright_green().to_string(),
        MessageKind::Vemo => "[vemo]".bright_cyan().to_string(),
        MessageKind::System => "[system]".bright_magenta().to_string(),
    };
    println!("{}  {}", tag, message.content);
    print_buttons(&message.actions);
    print_suggestions(&message.metadata.suggestions);
    println!();
}

/// Numbered button list; numbers work with `/action N`
pub fn print_buttons(buttons: &[ActionButton]) {
    if buttons.is_empty() {
        return;
    }
    for (i, button) in buttons.iter().enumerate() {
        println!(
            "        {} {} {}",
            format!("{}.", i + 1).bright_yellow(),
            button.label,
            format!("({})", button.action_id).dimmed()
        );
    }
}

pub fn print_suggestions(suggestions: &[String]) {
    if suggestions.is_empty() {
        return;
    }
    let joined = suggestions.join("  ·  ");
    println!("        {} {}", "›".dimmed(), joined.dimmed());
}

pub fn print_info(text: &str) {
    println!("{}  {}", "[vemo]".bright_cyan(), text.dimmed());
}

pub fn print_error(text: &str) {
    eprintln!("{}  {}", "[error]".bright_red(), text);
}
