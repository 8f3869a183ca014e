//! Dictionary matcher and ambiguity policy

use redatta_core::{Label, Result, Span};
use redatta_lexicon::{Category, Lexicon, COMMON_AMBIGUOUS_NAMES};
use regex::Regex;

use crate::context::at_sentence_start;
use crate::detect::Detector;

/// Categories handled here; provinces have their own detector because
/// their codes are matched byte-exact rather than case-folded.
const CATEGORIES: [Category; 5] = [
    Category::FirstNames,
    Category::Surnames,
    Category::Municipalities,
    Category::Regions,
    Category::Nations,
];

/// Matches lexicon entries against the text.
///
/// Unambiguous entries match case-insensitively anywhere. Ambiguous
/// entries (words that are also ordinary Italian vocabulary) match only in
/// capitalized form and only when the preceding context rules out sentence
/// casing; that whole path is disabled unless the caller opts in.
pub struct DictionaryMatcher {
    rules: Vec<CategoryRule>,
}

struct CategoryRule {
    label: Label,
    unambiguous: Option<Regex>,
    ambiguous: Option<Regex>,
}

impl DictionaryMatcher {
    pub fn new(lexicon: &Lexicon, ambiguous_matching: bool) -> Result<Self> {
        let mut rules = Vec::with_capacity(CATEGORIES.len() + 1);
        for category in CATEGORIES {
            let cat = lexicon.category(category);
            rules.push(CategoryRule {
                label: category.label(),
                unambiguous: compile_anywhere(cat.unambiguous.entries())?,
                ambiguous: if ambiguous_matching {
                    compile_capitalized(cat.ambiguous.entries().iter().map(String::as_str))?
                } else {
                    None
                },
            });
        }
        if ambiguous_matching {
            // Common given names that double as ordinary words, kept
            // independent of the lexicon files.
            rules.push(CategoryRule {
                label: Label::Per,
                unambiguous: None,
                ambiguous: compile_capitalized(COMMON_AMBIGUOUS_NAMES.iter().copied())?,
            });
        }
        Ok(Self { rules })
    }
}

impl Detector for DictionaryMatcher {
    fn detect(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for rule in &self.rules {
            if let Some(pattern) = &rule.unambiguous {
                for m in pattern.find_iter(text) {
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: rule.label.clone(),
                    });
                }
            }
            if let Some(pattern) = &rule.ambiguous {
                for m in pattern.find_iter(text) {
                    // A capitalized common word at a sentence start is most
                    // likely not a proper noun.
                    if at_sentence_start(text, m.start()) {
                        continue;
                    }
                    spans.push(Span {
                        start: m.start(),
                        end: m.end(),
                        label: rule.label.clone(),
                    });
                }
            }
        }
        // A lexicon entry can also sit on the built-in name list; the same
        // mention then matches under two rules. Drop exact duplicates.
        spans.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
        spans.dedup();
        spans
    }
}

/// Case-insensitive whole-word alternation over the entries, which arrive
/// sorted by length descending so longer entries win at a position.
fn compile_anywhere(entries: &[String]) -> Result<Option<Regex>> {
    if entries.is_empty() {
        return Ok(None);
    }
    let alternation = entries
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Some(Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))?))
}

/// Case-sensitive whole-word alternation over the capitalized entries.
fn compile_capitalized<'a>(entries: impl Iterator<Item = &'a str>) -> Result<Option<Regex>> {
    let mut capitalized: Vec<String> = entries
        .filter(|e| !e.is_empty())
        .map(capitalize)
        .collect();
    if capitalized.is_empty() {
        return Ok(None);
    }
    capitalized.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    capitalized.dedup();
    let alternation = capitalized
        .iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Some(Regex::new(&format!(r"\b(?:{alternation})\b"))?))
}

fn capitalize(entry: &str) -> String {
    let mut chars = entry.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
