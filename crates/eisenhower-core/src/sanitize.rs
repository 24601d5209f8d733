//! PII redaction for text that leaves the process.
//!
//! Patterns run in a fixed order, each replacing every non-overlapping match
//! with its placeholder: email, phone, URL, then long uppercase identifiers.
//! Placeholders are lower-case and digit-free so a second pass finds
//! nothing new.

use regex::Regex;
use std::sync::LazyLock;

/// A compiled redaction pattern.
struct Redaction {
    regex: &'static LazyLock<Option<Regex>>,
    placeholder: &'static str,
}

macro_rules! redaction_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

redaction_pattern!(RE_EMAIL, r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}");
// Leading digit (optionally "+"), then at least six more digits or separators,
// ending on a digit. Digits glued to letters belong to the id rule.
redaction_pattern!(RE_PHONE, r"(?:\+|\b)\d[\d\s().\-]{5,}\d\b");
redaction_pattern!(RE_URL, r"\bhttps?://\S+");
redaction_pattern!(RE_ID, r"\b[A-Z0-9]{8,}\b");

fn redactions() -> [Redaction; 4] {
    [
        Redaction {
            regex: &RE_EMAIL,
            placeholder: "[email]",
        },
        Redaction {
            regex: &RE_PHONE,
            placeholder: "[phone]",
        },
        Redaction {
            regex: &RE_URL,
            placeholder: "[url]",
        },
        Redaction {
            regex: &RE_ID,
            placeholder: "[id]",
        },
    ]
}

/// Redact emails, phone numbers, URLs and opaque identifiers.
pub fn sanitize_for_model(text: &str) -> String {
    redactions().into_iter().fold(text.to_string(), |acc, r| match &**r.regex {
        Some(re) => re.replace_all(&acc, r.placeholder).into_owned(),
        None => acc,
    })
}
