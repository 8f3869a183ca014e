//! Personal-data override matcher

use aho_corasick::{AhoCorasick, MatchKind};
use redatta_core::{Error, Label, PersonalData, Result, Span};
use regex::Regex;

use crate::context::{char_after, char_before, is_word_char};
use crate::detect::Detector;

/// Matches caller-supplied personal-data values verbatim.
///
/// These spans are ground truth: they bypass the ambiguity policy entirely
/// and carry labels (PATIENT above all) that outrank the generic ones in
/// the promotion table. Free-text fields match case-insensitively; code
/// fields (the residence province) match byte-exact.
pub struct OverrideMatcher {
    text_rules: Vec<(Regex, Label)>,
    code_rules: Option<(AhoCorasick, Vec<Label>)>,
}

impl OverrideMatcher {
    pub fn new(personal: &PersonalData) -> Result<Self> {
        let mut text_rules = Vec::new();
        let mut code_patterns = Vec::new();
        let mut code_labels = Vec::new();

        for (field, value) in personal.entries() {
            if field.case_sensitive() {
                code_patterns.push(value.to_string());
                code_labels.push(field.label());
            } else {
                let pattern =
                    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(value)))?;
                text_rules.push((pattern, field.label()));
            }
        }

        let code_rules = if code_patterns.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostLongest)
                .build(&code_patterns)
                .map_err(|e| Error::Automaton(e.to_string()))?;
            Some((ac, code_labels))
        };

        Ok(Self {
            text_rules,
            code_rules,
        })
    }
}

impl Detector for OverrideMatcher {
    fn detect(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for (pattern, label) in &self.text_rules {
            for m in pattern.find_iter(text) {
                spans.push(Span {
                    start: m.start(),
                    end: m.end(),
                    label: label.clone(),
                });
            }
        }
        if let Some((ac, labels)) = &self.code_rules {
            for m in ac.find_iter(text) {
                let standalone = !char_before(text, m.start()).is_some_and(is_word_char)
                    && !char_after(text, m.end()).is_some_and(is_word_char);
                if standalone {
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: labels[m.pattern().as_usize()].clone(),
                    });
                }
            }
        }
        spans
    }
}
