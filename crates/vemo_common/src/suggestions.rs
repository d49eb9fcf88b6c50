//! Follow-up suggestion phrases
//!
//! A third keyword table, separate from reply categories and action buttons.

struct SuggestionRule {
    triggers: &'static [&'static str],
    phrases: &'static [&'static str],
}

static SUGGESTION_TABLE: &[SuggestionRule] = &[
    SuggestionRule {
        triggers: &["hello", "hi", "hey"],
        phrases: &["💬 Tell me about yourself", "🎧 Hear your voice", "🚀 Show me something cool"],
    },
    SuggestionRule {
        triggers: &["yourself", "who are you"],
        phrases: &["🌐 What can you do?", "🎯 Show your capabilities", "💡 Give me tips"],
    },
    SuggestionRule {
        triggers: &["status", "health"],
        phrases: &["📊 Show detailed metrics", "🔍 Check device health", "📈 View performance trends"],
    },
    SuggestionRule {
        triggers: &["security", "threat"],
        phrases: &["🔍 Run security scan", "📋 View threat log", "🛡️ Update security policies"],
    },
    SuggestionRule {
        triggers: &["optimize", "performance"],
        phrases: &["⚡ Apply optimizations", "⏰ Schedule maintenance", "🌱 View energy savings"],
    },
    SuggestionRule {
        triggers: &["device", "node"],
        phrases: &["➕ Add new device", "⚠️ Check offline devices", "🔄 Update firmware"],
    },
    SuggestionRule {
        triggers: &["problem", "issue"],
        phrases: &["🔧 Run diagnostics", "💡 Get solutions", "📞 Contact support"],
    },
    SuggestionRule {
        triggers: &["thank", "cool"],
        phrases: &["🚀 Show more features", "💬 Ask another question", "🎯 Explore capabilities"],
    },
];

const DEFAULT_SUGGESTIONS: &[&str] = &[
    "🌐 Network overview",
    "🔧 Run diagnostics",
    "🚨 Check alerts",
    "📊 View analytics",
];

/// Suggestions shown before the user has typed anything
pub const QUICK_SUGGESTIONS: &[&str] = &[
    "Show network status",
    "Run diagnostics",
    "Check security alerts",
];

/// Suggestions attached to the welcome message
pub const WELCOME_SUGGESTIONS: &[&str] = &[
    "Show network analytics",
    "Check device health",
    "Optimize performance",
    "View security status",
];

/// Follow-up phrases for an utterance. Never empty.
pub fn smart_suggestions(utterance: &str) -> Vec<String> {
    let lower = utterance.to_lowercase();
    SUGGESTION_TABLE
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
        .map(|rule| rule.phrases)
        .unwrap_or(DEFAULT_SUGGESTIONS)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_suggestions() {
        let s = smart_suggestions("Hey Vemo");
        assert_eq!(s[0], "💬 Tell me about yourself");
    }

    #[test]
    fn test_first_row_wins() {
        // "this" contains "hi", so the greeting row wins over status
        let s = smart_suggestions("this status");
        assert_eq!(s[1], "🎧 Hear your voice");
    }

    #[test]
    fn test_default_suggestions() {
        let s = smart_suggestions("qwerty");
        assert_eq!(s.len(), 4);
        assert_eq!(s[2], "🚨 Check alerts");
    }
}
