//! Span consolidation engine
//!
//! Turns the unordered pile of candidate spans (recognizer output plus
//! every detector's output) into one sorted, non-overlapping span list.
//! The final result does not depend on the order candidate sets were
//! concatenated in.

use redatta_core::{Label, Span};
use std::cmp::Ordering;

/// Promoted label for an ordered pair of merging span labels.
///
/// The table is keyed on ordered pairs: the left argument is the span that
/// comes earlier in processing order. Pairs where both directions matter
/// are listed in both directions. `(GPE, LOC)` and `(GPE, FAC)` are
/// deliberately absent: the more specific label only wins as the earlier
/// span.
pub(crate) fn promote(a: &Label, b: &Label) -> Option<Label> {
    use Label::*;
    Some(match (a, b) {
        (Per, Patient) | (Patient, Per) => Patient,
        (Loc, Gpe) => Loc,
        (Fac, Gpe) => Fac,
        (Org, Fac) | (Fac, Org) => Org,
        (Org, Mail) | (Mail, Org) => Mail,
        (Per, Mail) | (Mail, Per) => Mail,
        (Org, Url) | (Url, Org) => Url,
        _ => return None,
    })
}

/// Fixed label ranking used to break ties between candidates covering the
/// exact same interval: the more specific label outranks the generic one.
/// Lower is stronger.
fn precedence(label: &Label) -> u8 {
    use Label::*;
    match label {
        Patient => 0,
        Per => 1,
        Mail => 2,
        Phone => 3,
        Url => 4,
        Code => 5,
        Prov => 6,
        Date => 7,
        Loc => 8,
        Fac => 9,
        Gpe => 10,
        Org => 11,
        Norp => 12,
        Other(_) => 13,
    }
}

/// Label for two candidates covering exactly the same interval.
///
/// The promotion table is consulted in both directions so the outcome
/// never depends on which candidate arrived first; pairs the table does
/// not know fall back to the fixed precedence ranking.
fn equal_interval_label(a: &Label, b: &Label) -> Label {
    if let Some(label) = promote(a, b).or_else(|| promote(b, a)) {
        return label;
    }
    match precedence(a).cmp(&precedence(b)) {
        Ordering::Less => a.clone(),
        Ordering::Greater => b.clone(),
        Ordering::Equal => {
            // two Other labels: pick by tag name
            if a.tag() <= b.tag() {
                a.clone()
            } else {
                b.clone()
            }
        }
    }
}

/// Consolidate `candidates` into a sorted, non-overlapping span list.
///
/// Containment drops the inner span; candidates covering the exact same
/// interval resolve through the promotion table (both directions) and
/// then the fixed label precedence; a longer span at the same start wins
/// outright; partial overlaps merge to the union interval with the
/// promoted label (falling back to the longer span's label, ties keeping
/// the earlier one); spans that touch or sit one space apart merge when
/// their labels agree or the promotion table says so, and stay separate
/// otherwise.
///
/// # Panics
///
/// Panics if the output violates its own invariant (unsorted or
/// overlapping spans): that is a defect in this engine, never a condition
/// for the caller to handle.
pub fn consolidate(text: &str, mut candidates: Vec<Span>) -> Vec<Span> {
    if candidates.is_empty() {
        return Vec::new();
    }

    // Processing order: by start, longer spans first, then by label
    // precedence so identical intervals always arrive in the same order.
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then_with(|| precedence(&a.label).cmp(&precedence(&b.label)))
            .then_with(|| a.label.tag().cmp(b.label.tag()))
    });

    let mut merged = Vec::new();
    let mut iter = candidates.into_iter();
    let mut current = iter.next().expect("candidates is non-empty");

    for next in iter {
        if next.start < current.end {
            if next.end <= current.end {
                if next.start == current.start
                    && next.end == current.end
                    && next.label != current.label
                {
                    current.label = equal_interval_label(&current.label, &next.label);
                } // else strictly contained
                continue;
            }
            if next.start == current.start {
                // same start, next extends further
                current = next;
                continue;
            }
            // partial overlap: union interval, promoted or longer label
            let label = promote(&current.label, &next.label).unwrap_or_else(|| {
                if next.len() > current.len() {
                    next.label.clone()
                } else {
                    current.label.clone()
                }
            });
            current = Span {
                start: current.start,
                end: next.end,
                label,
            };
        } else if next.start == current.end || single_space_between(text, current.end, next.start)
        {
            let label = if current.label == next.label {
                Some(current.label.clone())
            } else {
                promote(&current.label, &next.label)
            };
            match label {
                Some(label) => {
                    current = Span {
                        start: current.start,
                        end: next.end,
                        label,
                    };
                }
                None => {
                    // the one case where two touching candidates stay apart
                    merged.push(current);
                    current = next;
                }
            }
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    assert_consolidated(text, &merged);
    merged
}

fn single_space_between(text: &str, end: usize, start: usize) -> bool {
    start == end + 1 && text.as_bytes().get(end) == Some(&b' ')
}

/// Postcondition of [`consolidate`]; a violation is a programming defect.
fn assert_consolidated(text: &str, spans: &[Span]) {
    for span in spans {
        assert!(
            span.start < span.end && span.end <= text.len(),
            "consolidated span [{}, {}) escapes text of {} bytes",
            span.start,
            span.end,
            text.len()
        );
        assert!(
            text.is_char_boundary(span.start) && text.is_char_boundary(span.end),
            "consolidated span [{}, {}) splits a character",
            span.start,
            span.end
        );
    }
    for pair in spans.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "consolidated spans overlap or are unsorted: [{}, {}) then [{}, {})",
            pair[0].start,
            pair[0].end,
            pair[1].start,
            pair[1].end
        );
    }
}
