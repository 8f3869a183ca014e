//! Province code detector

use aho_corasick::{AhoCorasick, MatchKind};
use redatta_core::{Error, Label, Result, Span};
use redatta_lexicon::CategoryLexicon;

use crate::context::{char_after, char_before, is_word_char};
use crate::detect::Detector;

/// Detects Italian province codes, label PROV.
///
/// Unambiguous codes match as standalone uppercase tokens. Ambiguous codes
/// (two-letter codes that collide with short common words) only match when
/// wrapped in parentheses, e.g. `(MI)`; the span covers the code, not the
/// parentheses.
pub struct ProvinceDetector {
    unambiguous: Option<AhoCorasick>,
    ambiguous: Option<AhoCorasick>,
}

impl ProvinceDetector {
    pub fn new(lexicon: &CategoryLexicon) -> Result<Self> {
        Ok(Self {
            unambiguous: build_automaton(lexicon.unambiguous.entries())?,
            ambiguous: build_automaton(lexicon.ambiguous.entries())?,
        })
    }

    fn standalone_token(text: &str, start: usize, end: usize) -> bool {
        !char_before(text, start).is_some_and(is_word_char)
            && !char_after(text, end).is_some_and(is_word_char)
    }

    fn parenthesized(text: &str, start: usize, end: usize) -> bool {
        char_before(text, start) == Some('(') && char_after(text, end) == Some(')')
    }
}

impl Detector for ProvinceDetector {
    fn detect(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        if let Some(ac) = &self.unambiguous {
            for m in ac.find_iter(text) {
                if Self::standalone_token(text, m.start(), m.end()) {
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: Label::Prov,
                    });
                }
            }
        }
        if let Some(ac) = &self.ambiguous {
            for m in ac.find_iter(text) {
                if Self::parenthesized(text, m.start(), m.end()) {
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: Label::Prov,
                    });
                }
            }
        }
        spans
    }
}

/// Province codes are matched byte-exact in their uppercase form; the
/// lexicon stores entries lowercased, so they are uppercased here.
fn build_automaton(entries: &[String]) -> Result<Option<AhoCorasick>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let patterns: Vec<String> = entries.iter().map(|e| e.to_uppercase()).collect();
    let ac = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)
        .map_err(|e| Error::Automaton(e.to_string()))?;
    Ok(Some(ac))
}
