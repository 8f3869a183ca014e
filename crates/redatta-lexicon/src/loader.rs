//! Word-list loading

use crate::category::Category;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// An immutable list of dictionary entries.
///
/// Entries are trimmed, deduplicated and sorted by length descending so a
/// compiled alternation prefers multi-word entries ("Marco Antonio" before
/// "Marco").
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: Vec<String>,
}

impl WordList {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_lowercase())
                }
            })
            .collect();
        entries.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        entries.dedup();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The two partitions of one category's lexicon.
#[derive(Debug, Clone, Default)]
pub struct CategoryLexicon {
    /// Entries safe to match case-insensitively anywhere.
    pub unambiguous: WordList,
    /// Entries that are also ordinary vocabulary; matched only under the
    /// capitalization/context guard.
    pub ambiguous: WordList,
}

/// All category lexicons, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    categories: HashMap<Category, CategoryLexicon>,
}

impl Lexicon {
    /// Load every category from `dir`.
    ///
    /// A missing or unreadable file degrades that partition to an empty
    /// list; categories are independent and loading never fails.
    pub fn load(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut categories = HashMap::new();
        for category in Category::ALL {
            let lexicon = CategoryLexicon {
                unambiguous: load_wordlist(dir, category.stem(), "not_ambiguous"),
                ambiguous: load_wordlist(dir, category.stem(), "ambiguous"),
            };
            debug!(
                category = category.stem(),
                unambiguous = lexicon.unambiguous.len(),
                ambiguous = lexicon.ambiguous.len(),
                "loaded lexicon category"
            );
            categories.insert(category, lexicon);
        }
        Self { categories }
    }

    /// An empty lexicon; every category yields no matches.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn category(&self, category: Category) -> CategoryLexicon {
        self.categories.get(&category).cloned().unwrap_or_default()
    }
}

fn load_wordlist(dir: &Path, stem: &str, suffix: &str) -> WordList {
    let path = dir.join(format!("{stem}_it_{suffix}.txt"));
    match fs::read_to_string(&path) {
        Ok(contents) => WordList::from_lines(contents.lines()),
        Err(err) => {
            warn!(path = %path.display(), %err, "word list unavailable, category degrades to no matches");
            WordList::default()
        }
    }
}
