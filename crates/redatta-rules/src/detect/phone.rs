//! Phone number detector

use crate::context::{char_after, char_before, is_word_char};
use crate::detect::Detector;
use redatta_core::{Label, Result, Span};
use regex::Regex;

/// Detects phone numbers, label PHONE.
///
/// A candidate is a run of digits and the separators space/`.`/`(`/`)`/
/// `-`/`/`, optionally prefixed with `+` or `00` and optionally followed by
/// an extension suffix. Candidates are then validated: 7 to 15 digits in
/// total, not glued to a preceding or following word character, and not a
/// date.
pub struct PhoneDetector {
    candidate: Regex,
    date_like: Regex,
}

impl PhoneDetector {
    pub fn new() -> Result<Self> {
        let candidate = Regex::new(
            r"(?i)(?:\+|00)?\(?\d[\d\s().\-/]{5,23}\d(?:\s*(?:ext|x|extension)\s*\d{1,5})?",
        )?;
        // DD[-/]MM[-/]YYYY, optionally followed by a (possibly truncated) time
        let date_like = Regex::new(
            r"^\d{1,2}[-/]\d{1,2}[-/]\d{2,4}(?:\s+\d{1,2}(?:[:.]\d{2}(?::\d{2})?)?)?$",
        )?;
        Ok(Self {
            candidate,
            date_like,
        })
    }

    fn is_valid(&self, text: &str, start: usize, end: usize) -> bool {
        if char_before(text, start).is_some_and(is_word_char) {
            return false;
        }
        if char_after(text, end).is_some_and(is_word_char) {
            return false;
        }
        let digits = text[start..end].chars().filter(char::is_ascii_digit).count();
        if !(7..=15).contains(&digits) {
            return false;
        }
        // Dates satisfy the digit-count rule but are never phone numbers.
        !self.date_like.is_match(text[start..end].trim_end())
    }
}

impl Detector for PhoneDetector {
    fn detect(&self, text: &str) -> Vec<Span> {
        self.candidate
            .find_iter(text)
            .filter(|m| self.is_valid(text, m.start(), m.end()))
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
                label: Label::Phone,
            })
            .collect()
    }
}
