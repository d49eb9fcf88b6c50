//! Speech Normalizer
//!
//! Turns display text into an ordered list of speakable sentences. The
//! pipeline is a fixed sequence of rewrites followed by sentence segmentation:
//!
//! 1. drop `*stage directions*`
//! 2. drop decorative emoji
//! 3. bullets become commas
//! 4. line breaks become pause points, whitespace collapses
//! 5. percentages and decimals are spelled out
//! 6. thousands separators are removed
//! 7. technical abbreviations are expanded
//! 8. split on `.`, `!`, `?`

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Emoji removed before speaking, plus the U+FE0F variation selector
const STRIPPED_EMOJI: &[char] = &[
    '🎉', '🚀', '💪', '😊', '🌐', '⚡', '🛡', '📱', '🔧', '✅', '🎧', '💡', '🔍', '📊', '📈', '⏰',
    '🌱', '➕', '⚠', '🔄', '💬', '🎯', '📋', '🚨', '👀', '😌', '🥰', '🤩', '💚', '😟', '💃', '✨',
    '🎵', '📞', '🌟', '💯', '🔥', '\u{FE0F}',
];

/// Abbreviation expansions, applied in order
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("Gbps", "gigabits per second"),
    ("Mbps", "megabits per second"),
    ("kWh", "kilowatt hours"),
    ("ms", "milliseconds"),
    ("dBm", "decibel milliwatts"),
    ("kg", "kilograms"),
    ("CO2", "C O 2"),
    ("VPN", "V P N"),
    ("QoS", "Quality of Service"),
    ("IoT", "I o T"),
    ("WiFi", "Wi-Fi"),
    ("ESP32", "E S P 32"),
    ("IDS/IPS", "I D S and I P S"),
    ("DDoS", "D Dos"),
    ("VLAN", "V LAN"),
    ("OSPF", "O S P F"),
    ("BGP", "B G P"),
    ("WPA3", "W P A 3"),
    ("SLA", "S L A"),
    ("CPU", "C P U"),
    ("AM", "A M"),
    ("PM", "P M"),
];

/// Tokens that only match with exact case ("I am" must survive)
const CASE_SENSITIVE: &[&str] = &["AM", "PM"];

static STAGE_DIRECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*[^*]*\*").unwrap());
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]*(?:\r?\n)+[ \t]*").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
// "Done!\nNext" would otherwise read "Done!. Next"
static DOUBLED_TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?])\s*\.(\s|$)").unwrap());
static DECIMAL_PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\.(\d+)%").unwrap());
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").unwrap());
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\.(\d+)").unwrap());
static THOUSANDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d),(\d{3})\b").unwrap());
static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Token-bounded abbreviation patterns. The leading group keeps the
/// character before the token so a digit prefix ("12ms") can be spaced; the
/// trailing group keeps a lowercase plural "s" ("ESP32s", "CPUs").
static ABBREVIATION_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    ABBREVIATIONS
        .iter()
        .map(|(token, expansion)| {
            let token_pattern = if CASE_SENSITIVE.contains(token) {
                regex::escape(token)
            } else {
                format!("(?i:{})", regex::escape(token))
            };
            let pattern = format!(r"(^|[^A-Za-z]){}(s?)\b", token_pattern);
            (Regex::new(&pattern).unwrap(), *expansion)
        })
        .collect()
});

/// Normalize display text into speakable sentences.
///
/// Total: blank input yields an empty vector, text without a terminator is a
/// single sentence.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return Vec::new();
    }
    split_sentences(&cleaned)
}

/// Steps 1-7 of the pipeline, without segmentation
pub fn clean(text: &str) -> String {
    let text = STAGE_DIRECTION.replace_all(text, "");
    let text: String = text.chars().filter(|c| !STRIPPED_EMOJI.contains(c)).collect();
    let text = text.replace('•', ",");

    let text = LINE_BREAKS.replace_all(&text, ". ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = DOUBLED_TERMINATOR.replace_all(&text, "${1}${2}");
    let text = text.trim();

    let text = DECIMAL_PERCENT.replace_all(text, "${1} point ${2} percent");
    let text = PERCENT.replace_all(&text, "${1} percent");
    let text = DECIMAL.replace_all(&text, "${1} point ${2}");

    let mut text = text.into_owned();
    loop {
        let next = THOUSANDS.replace_all(&text, "${1}${2}").into_owned();
        if next == text {
            break;
        }
        text = next;
    }

    for (pattern, expansion) in ABBREVIATION_PATTERNS.iter() {
        text = pattern
            .replace_all(&text, |caps: &Captures| {
                let prefix = &caps[1];
                let spacer = if prefix.chars().all(|c| c.is_ascii_digit()) && !prefix.is_empty() {
                    " "
                } else {
                    ""
                };
                // "kilograms" is already plural
                let plural = if expansion.ends_with('s') { "" } else { &caps[2] };
                format!("{}{}{}{}", prefix, spacer, expansion, plural)
            })
            .into_owned();
    }

    text.trim().to_string()
}

fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut consumed = 0;

    for m in SENTENCE.find_iter(text) {
        push_trimmed(&mut sentences, m.as_str());
        consumed = m.end();
    }
    push_trimmed(&mut sentences, &text[consumed..]);

    sentences
}

fn push_trimmed(out: &mut Vec<String>, segment: &str) {
    let segment = segment.trim();
    if !segment.is_empty() && !segment.chars().all(|c| matches!(c, '.' | '!' | '?')) {
        out.push(segment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_spelled_out() {
        let out = normalize("Network is at 98.7% health");
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("98 point 7 percent"), "got {:?}", out);
        assert_eq!(normalize("Load at 40%"), vec!["Load at 40 percent"]);
        assert_eq!(normalize("Version 2.5 is out."), vec!["Version 2 point 5 is out."]);
    }

    #[test]
    fn test_stage_direction_removed() {
        assert_eq!(
            normalize("*waves* Hello there! How are you?"),
            vec!["Hello there!", "How are you?"]
        );
    }

    #[test]
    fn test_blank_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t ").is_empty());
        assert!(normalize("🚀✅").is_empty());
        assert!(normalize("*nods*").is_empty());
    }

    #[test]
    fn test_no_terminator_is_one_sentence() {
        assert_eq!(normalize("all systems nominal"), vec!["all systems nominal"]);
        assert_eq!(normalize("Done. and then some"), vec!["Done.", "and then some"]);
    }

    #[test]
    fn test_emoji_and_bullets() {
        let out = normalize("🛡️ Security scan complete ✅\n• 0 threats\n• 3 warnings");
        assert_eq!(out, vec!["Security scan complete.", ", 0 threats.", ", 3 warnings"]);
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(clean("1,247,000 packets"), "1247000 packets");
        assert_eq!(clean("247 devices, 12 gateways"), "247 devices, 12 gateways");
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(clean("12ms average latency"), "12 milliseconds average latency");
        assert_eq!(clean("1 Gbps uplink over VPN"), "1 gigabits per second uplink over V P N");
        assert_eq!(clean("IDS/IPS active"), "I D S and I P S active");
        assert_eq!(clean("ESP32 nodes"), "E S P 32 nodes");
        assert_eq!(clean("backup at 3:00 AM"), "backup at 3:00 A M");
    }

    #[test]
    fn test_abbreviations_respect_word_boundaries() {
        assert_eq!(clean("background tasks"), "background tasks");
        assert_eq!(clean("I am the team lead"), "I am the team lead");
        assert_eq!(clean("slap the class"), "slap the class");
    }

    #[test]
    fn test_abbreviation_plurals() {
        assert_eq!(normalize("ESP32s online"), vec!["E S P 32s online"]);
        assert_eq!(clean("two CPUs and three VPNs"), "two C P Us and three V P Ns");
        assert_eq!(clean("5kgs of gear"), "5 kilograms of gear");
        assert_eq!(clean("AMs"), "A Ms");
    }

    #[test]
    fn test_newlines_become_pauses() {
        assert_eq!(normalize("Line one\nLine two"), vec!["Line one.", "Line two"]);
        assert_eq!(normalize("Done!\n\nNext up"), vec!["Done!", "Next up"]);
    }

    #[test]
    fn test_colon_before_list_keeps_its_pause() {
        assert_eq!(normalize("Summary:\n• a\n• b"), vec!["Summary:.", ", a.", ", b"]);
        assert_eq!(clean("Note;\nnext"), "Note;. next");
    }

    #[test]
    fn test_deterministic() {
        let text = "📊 Analytics: 2.4 TB processed, 99.97% uptime!";
        assert_eq!(normalize(text), normalize(text));
    }
}
