//! The anonymization pipeline

use redatta_core::{ConsolidatedDocument, Label, PersonalData, Result, Span};
use redatta_lexicon::{Category, Lexicon};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::detect::{
    CodeDetector, Detector, MailDetector, PhoneDetector, ProvinceDetector, UrlDetector,
};
use crate::dictionary::DictionaryMatcher;
use crate::merge::consolidate;
use crate::overrides::OverrideMatcher;
use crate::render::redact;

/// Tunables for the rule layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Enable the ambiguous PER/PATIENT/GPE dictionary paths (capitalized
    /// common words under the context guard). Off by default: the guard is
    /// a heuristic and some deployments prefer to rely on the recognizer
    /// and the unambiguous lists alone. Regex detectors and unambiguous
    /// entries always run.
    #[serde(default)]
    pub ambiguous_matching: bool,
}

/// One redaction request pipeline: detectors and dictionaries compiled
/// once, then reused across requests. Shareable across worker threads;
/// nothing in here mutates after construction.
pub struct Anonymizer {
    detectors: Vec<Box<dyn Detector>>,
}

impl Anonymizer {
    pub fn new(lexicon: &Lexicon, config: RuleConfig) -> Result<Self> {
        let detectors: Vec<Box<dyn Detector>> = vec![
            Box::new(MailDetector::new()?),
            Box::new(UrlDetector::new()?),
            Box::new(PhoneDetector::new()?),
            Box::new(CodeDetector::new()?),
            Box::new(ProvinceDetector::new(&lexicon.category(Category::Provinces))?),
            Box::new(DictionaryMatcher::new(lexicon, config.ambiguous_matching)?),
        ];
        Ok(Self { detectors })
    }

    /// Run every candidate source over `text` and consolidate the results.
    ///
    /// `recognizer_spans` are the statistical recognizer's spans over the
    /// same NFC-normalized text; they join consolidation as one more
    /// candidate set. `personal_data` values are matched verbatim and win
    /// through label promotion (PATIENT over PER).
    pub fn annotate(
        &self,
        text: &str,
        recognizer_spans: &[Span],
        personal_data: Option<&PersonalData>,
    ) -> Result<ConsolidatedDocument> {
        let text = normalize(text);

        let mut candidates = Vec::new();
        for span in recognizer_spans {
            span.check_bounds(&text)?;
            candidates.push(span.clone());
        }

        if let Some(personal) = personal_data {
            candidates.extend(OverrideMatcher::new(personal)?.detect(&text));
        }
        for detector in &self.detectors {
            candidates.extend(detector.detect(&text));
        }
        debug!(candidates = candidates.len(), "collected candidate spans");

        let spans = consolidate(&text, candidates);
        debug!(spans = spans.len(), "consolidated spans");
        Ok(ConsolidatedDocument::new(text, spans))
    }

    /// Annotate and render in one step.
    pub fn anonymize(
        &self,
        text: &str,
        recognizer_spans: &[Span],
        personal_data: Option<&PersonalData>,
        allowed: Option<&HashSet<Label>>,
    ) -> Result<String> {
        let doc = self.annotate(text, recognizer_spans, personal_data)?;
        redact(doc.text(), doc.spans(), allowed)
    }
}

/// Normalize to NFC once, before any matching, so every detector sees the
/// same offsets for composed and decomposed input alike.
fn normalize(text: &str) -> String {
    if is_nfc(text) {
        text.to_string()
    } else {
        text.nfc().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_composes_decomposed_accents() {
        // "a" + combining grave vs precomposed "à"
        let decomposed = "citta\u{0300}";
        assert_eq!(normalize(decomposed), "città");
        assert_eq!(normalize("città"), "città");
    }

    #[test]
    fn empty_input_produces_empty_document() {
        let anonymizer = Anonymizer::new(&Lexicon::empty(), RuleConfig::default()).unwrap();
        let doc = anonymizer.annotate("", &[], None).unwrap();
        assert_eq!(doc.text(), "");
        assert!(doc.spans().is_empty());
    }

    #[test]
    fn recognizer_spans_are_bounds_checked() {
        let anonymizer = Anonymizer::new(&Lexicon::empty(), RuleConfig::default()).unwrap();
        let bogus = Span {
            start: 0,
            end: 999,
            label: Label::Per,
        };
        assert!(anonymizer.annotate("breve", &[bogus], None).is_err());
    }
}
