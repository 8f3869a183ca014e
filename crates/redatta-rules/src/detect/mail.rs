//! Email detector

use crate::detect::Detector;
use redatta_core::{Label, Result, Span};
use regex::Regex;

/// Detects email addresses, label MAIL.
pub struct MailDetector {
    pattern: Regex,
}

impl MailDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")?;
        Ok(Self { pattern })
    }
}

impl Detector for MailDetector {
    fn detect(&self, text: &str) -> Vec<Span> {
        self.pattern
            .find_iter(text)
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
                label: Label::Mail,
            })
            .collect()
    }
}
