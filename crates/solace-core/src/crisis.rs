//! Crisis phrase detection

use regex::Regex;
use std::sync::OnceLock;

static CRISIS_RE: OnceLock<Regex> = OnceLock::new();

/// Scripted reply shown instead of a model response when a crisis phrase is detected
pub const CRISIS_MESSAGE: &str = "I'm really sorry you're feeling this way. \
If you're in immediate danger or feel like you might harm yourself, \
please call your local emergency number right now.\n\n\
UK & ROI: Samaritans 116 123 (free, 24/7)\n\
US & Canada: Call or text 988 (Suicide & Crisis Lifeline)\n\
Elsewhere: Tell me your country and I can suggest local options.\n\n\
If you can, try not to be alone right now. Reach out to someone you trust.";

fn crisis_pattern() -> &'static Regex {
    CRISIS_RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(suicide|kill\s+myself|end\s+my\s+life|self[\s-]+harm|hurt\s+myself|want\s+to\s+die)\b",
        )
        .expect("crisis pattern is a valid regex")
    })
}

/// True when the text contains a self-harm or suicide phrase
pub fn is_crisis(text: &str) -> bool {
    crisis_pattern().is_match(text)
}
