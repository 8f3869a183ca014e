//! Redaction rendering

use once_cell::sync::Lazy;
use redatta_core::{Label, Result, Span};
use regex::Regex;
use std::collections::HashSet;

use crate::context::is_word_char;

/// A rendered placeholder tag, e.g. `[PER]` or `[PHONE]`.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[A-Z][A-Z0-9_-]*\]").expect("tag pattern is valid"));

/// Replace the selected spans of `text` with `[LABEL]` placeholders.
///
/// `allowed` restricts redaction to those labels; `None` redacts every
/// span. Spans must be consolidated (sorted, non-overlapping); any span
/// that escapes the text or splits a character is an upstream contract
/// violation and rejects the whole call.
pub fn redact(text: &str, spans: &[Span], allowed: Option<&HashSet<Label>>) -> Result<String> {
    for span in spans {
        span.check_bounds(text)?;
    }

    let mut selected: Vec<&Span> = spans
        .iter()
        .filter(|span| allowed.is_none_or(|labels| labels.contains(&span.label)))
        .collect();

    // Replace right to left so earlier replacements keep later offsets valid.
    selected.sort_by(|a, b| b.start.cmp(&a.start));
    let mut out = text.to_string();
    for span in selected {
        out.replace_range(span.start..span.end, &format!("[{}]", span.label));
    }

    Ok(space_after_tags(&collapse_repeated_tags(&out)))
}

/// Collapse runs of the same tag separated only by whitespace into one
/// occurrence. Independent substitution can legitimately leave two
/// same-label tags adjacent.
fn collapse_repeated_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut previous: Option<(String, usize)> = None;

    for m in TAG_RE.find_iter(text) {
        if let Some((tag, end)) = &previous {
            if tag == m.as_str() && text[*end..m.start()].chars().all(char::is_whitespace) {
                // duplicate: skip the gap and the tag itself
                copied = m.end();
                previous = Some((tag.clone(), m.end()));
                continue;
            }
        }
        out.push_str(&text[copied..m.end()]);
        copied = m.end();
        previous = Some((m.as_str().to_string(), m.end()));
    }
    out.push_str(&text[copied..]);
    out
}

/// Ensure one space between a tag and a directly following word character;
/// punctuation after a tag is left alone.
fn space_after_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for m in TAG_RE.find_iter(text) {
        out.push_str(&text[copied..m.end()]);
        copied = m.end();
        if text[m.end()..].chars().next().is_some_and(is_word_char) {
            out.push(' ');
        }
    }
    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use redatta_core::Error;

    fn span(start: usize, end: usize, label: Label) -> Span {
        Span { start, end, label }
    }

    #[test]
    fn replaces_spans_with_tags() {
        let text = "Il Dott. Rossi vive a Milano.";
        let spans = vec![span(9, 14, Label::Per), span(22, 28, Label::Gpe)];
        let out = redact(text, &spans, None).unwrap();
        assert_eq!(out, "Il Dott. [PER] vive a [GPE].");
    }

    #[test]
    fn allow_list_filters_labels() {
        let text = "Il Dott. Rossi vive a Milano.";
        let spans = vec![span(9, 14, Label::Per), span(22, 28, Label::Gpe)];
        let allowed: HashSet<Label> = [Label::Gpe].into_iter().collect();
        let out = redact(text, &spans, Some(&allowed)).unwrap();
        assert_eq!(out, "Il Dott. Rossi vive a [GPE].");
    }

    #[test]
    fn collapses_repeated_tags() {
        assert_eq!(collapse_repeated_tags("[PER][PER] Bianchi"), "[PER] Bianchi");
        assert_eq!(
            collapse_repeated_tags("[PER] [PER] [PER] Bianchi"),
            "[PER] Bianchi"
        );
        // different tags are untouched
        assert_eq!(
            collapse_repeated_tags("[PER] [GPE] Bianchi"),
            "[PER] [GPE] Bianchi"
        );
    }

    #[test]
    fn spaces_tag_from_following_word() {
        assert_eq!(space_after_tags("[PER]John"), "[PER] John");
        assert_eq!(space_after_tags("[PER], ecco"), "[PER], ecco");
        assert_eq!(space_after_tags("([PROV])"), "([PROV])");
    }

    #[test]
    fn rejects_out_of_bounds_spans() {
        let result = redact("corto", &[span(0, 99, Label::Per)], None);
        assert!(matches!(result, Err(Error::SpanOutOfBounds { .. })));

        let result = redact("testo", &[span(3, 3, Label::Per)], None);
        assert!(matches!(result, Err(Error::InvalidSpan { .. })));
    }

    #[test]
    fn leaves_text_without_spans_alone() {
        let text = "nessuna entita' qui";
        assert_eq!(redact(text, &[], None).unwrap(), text);
    }

    #[test]
    fn rendering_is_idempotent_on_tags() {
        let text = "visita di [PER] a [GPE].";
        assert_eq!(redact(text, &[], None).unwrap(), text);
    }
}
