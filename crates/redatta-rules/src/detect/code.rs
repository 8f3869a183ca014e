//! Identifier/code detector

use crate::context::{char_after, char_before};
use crate::detect::Detector;
use redatta_core::{Label, Result, Span};
use regex::Regex;

/// Detects fiscal codes, document numbers and generic identifiers,
/// label CODE.
///
/// Alternatives are listed in priority order; the regex engine's
/// leftmost-first semantics make earlier alternatives win at a given
/// position. The generic fallback is deliberately broad (any 3-20
/// character uppercase alphanumeric token with at least one letter and one
/// digit); narrowing it is a policy decision, not a bug.
pub struct CodeDetector {
    pattern: Regex,
}

impl CodeDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"(?x)
            \b
            (?:
                [A-Z]{6}\d{2}[A-Z]\d{2}[A-Z]\d{3}[A-Z]     # codice fiscale
              | \d{5}                                      # postal code
              | [A-Z]{2,3}\d{5,7}[A-Z]{0,2}                # CIE / passport
              | [A-Z]\d{2}(?:\.[A-Z0-9]{1,4})?             # ICD-10 style
              | (?P<generic>[A-Z0-9]+(?:-[A-Z0-9]+)*)      # generic identifier
            )
            \b",
        )?;
        Ok(Self { pattern })
    }

    /// Extra constraints the generic fallback carries: length 3-20, at
    /// least one letter and one digit, and not adjacent to `[`/`]` so
    /// already-rendered tags are left alone on re-detection.
    fn generic_is_valid(text: &str, start: usize, end: usize) -> bool {
        let token = &text[start..end];
        let len = token.chars().count();
        if !(3..=20).contains(&len) {
            return false;
        }
        if !token.chars().any(|c| c.is_ascii_alphabetic())
            || !token.chars().any(|c| c.is_ascii_digit())
        {
            return false;
        }
        if char_before(text, start) == Some('[') || char_after(text, end) == Some(']') {
            return false;
        }
        true
    }
}

impl Detector for CodeDetector {
    fn detect(&self, text: &str) -> Vec<Span> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let m = caps.get(0)?;
                if let Some(generic) = caps.name("generic") {
                    if !Self::generic_is_valid(text, generic.start(), generic.end()) {
                        return None;
                    }
                }
                Some(Span {
                    start: m.start(),
                    end: m.end(),
                    label: Label::Code,
                })
            })
            .collect()
    }
}
