//! Annotated spans and the consolidated document value type

use crate::error::{Error, Result};
use crate::label::Label;
use serde::{Deserialize, Serialize};

/// A labeled half-open byte range `[start, end)` into one text buffer.
///
/// Offsets always refer to the NFC-normalized text the span was produced
/// over; `start < end` holds for every span built through [`Span::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub label: Label,
}

impl Span {
    /// Create a span, rejecting empty or inverted ranges.
    pub fn new(start: usize, end: usize, label: Label) -> Result<Self> {
        if start >= end {
            return Err(Error::InvalidSpan { start, end });
        }
        Ok(Self { start, end, label })
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check that the span addresses a valid character range of `text`.
    pub fn check_bounds(&self, text: &str) -> Result<()> {
        if self.start >= self.end {
            return Err(Error::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > text.len() {
            return Err(Error::SpanOutOfBounds {
                start: self.start,
                end: self.end,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(self.start) || !text.is_char_boundary(self.end) {
            return Err(Error::SpanNotOnCharBoundary {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// A text paired with its consolidated annotations.
///
/// Produced by the consolidation engine: `spans` is sorted by start and
/// pairwise non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedDocument {
    text: String,
    spans: Vec<Span>,
}

impl ConsolidatedDocument {
    /// Assemble a document from already-consolidated spans.
    ///
    /// Callers outside the consolidation engine should not need this; it
    /// does not re-verify the non-overlap invariant.
    pub fn new(text: String, spans: Vec<Span>) -> Self {
        Self { text, spans }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text slice covered by a span of this document.
    ///
    /// # Panics
    ///
    /// Panics if `span` does not address a valid character range of this
    /// document's text. Spans taken from [`Self::spans`] satisfy that by
    /// construction; spans from anywhere else must pass
    /// [`Span::check_bounds`] against [`Self::text`] first.
    pub fn slice(&self, span: &Span) -> &str {
        &self.text[span.start..span.end]
    }

    pub fn into_parts(self) -> (String, Vec<Span>) {
        (self.text, self.spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_inverted_spans() {
        assert!(Span::new(3, 3, Label::Per).is_err());
        assert!(Span::new(5, 2, Label::Per).is_err());
        assert!(Span::new(0, 1, Label::Per).is_ok());
    }

    #[test]
    fn bounds_check_catches_overruns() {
        let span = Span::new(0, 10, Label::Gpe).unwrap();
        assert!(matches!(
            span.check_bounds("corto"),
            Err(Error::SpanOutOfBounds { .. })
        ));
        assert!(span.check_bounds("abbastanza lungo").is_ok());
    }

    #[test]
    #[should_panic]
    fn slice_rejects_spans_from_another_text() {
        let doc = ConsolidatedDocument::new("corto".to_string(), Vec::new());
        let foreign = Span::new(0, 99, Label::Per).unwrap();
        let _ = doc.slice(&foreign);
    }

    #[test]
    fn bounds_check_catches_split_characters() {
        // "città" has a two-byte 'à' at bytes 4..6
        let span = Span::new(0, 5, Label::Gpe).unwrap();
        assert!(matches!(
            span.check_bounds("città"),
            Err(Error::SpanNotOnCharBoundary { .. })
        ));
    }
}
