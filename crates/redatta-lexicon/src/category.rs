//! Lexicon categories

use redatta_core::Label;

/// One dictionary category with its on-disk stem and emitted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FirstNames,
    Surnames,
    Municipalities,
    Regions,
    Nations,
    Provinces,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::FirstNames,
        Category::Surnames,
        Category::Municipalities,
        Category::Regions,
        Category::Nations,
        Category::Provinces,
    ];

    /// File stem: lists live in `<stem>_it_not_ambiguous.txt` and
    /// `<stem>_it_ambiguous.txt`.
    pub fn stem(self) -> &'static str {
        match self {
            Category::FirstNames => "nomi",
            Category::Surnames => "cognomi",
            Category::Municipalities => "comuni",
            Category::Regions => "regioni",
            Category::Nations => "nazioni",
            Category::Provinces => "province",
        }
    }

    /// Label attached to matches from this category.
    pub fn label(self) -> Label {
        match self {
            Category::FirstNames | Category::Surnames => Label::Per,
            Category::Municipalities | Category::Regions | Category::Nations => Label::Gpe,
            Category::Provinces => Label::Prov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_are_distinct() {
        let mut stems: Vec<_> = Category::ALL.iter().map(|c| c.stem()).collect();
        stems.sort();
        stems.dedup();
        assert_eq!(stems.len(), Category::ALL.len());
    }

    #[test]
    fn labels_match_category_kind() {
        assert_eq!(Category::FirstNames.label(), Label::Per);
        assert_eq!(Category::Municipalities.label(), Label::Gpe);
        assert_eq!(Category::Provinces.label(), Label::Prov);
    }
}
