//! Built-in ambiguous given names

/// Very common Italian given names that are also ordinary vocabulary.
///
/// These are matched with the same capitalization/context guard as the
/// ambiguous lexicon partitions, independently of the lexicon files: the
/// names are frequent enough that dropping them when a lexicon is trimmed
/// for size would noticeably hurt recall, and case is what disambiguates
/// them ("Rosa Bianchi" vs "una rosa bianca").
pub const COMMON_AMBIGUOUS_NAMES: &[&str] = &[
    "alba",
    "angelo",
    "aurora",
    "bianca",
    "chiara",
    "costanza",
    "felice",
    "fiore",
    "franca",
    "franco",
    "gaia",
    "gemma",
    "giada",
    "grazia",
    "italia",
    "luca",
    "marco",
    "margherita",
    "marina",
    "marino",
    "perla",
    "regina",
    "rosa",
    "serena",
    "speranza",
    "stella",
    "viola",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_lowercase_and_sorted() {
        for name in COMMON_AMBIGUOUS_NAMES {
            assert_eq!(*name, name.to_lowercase());
        }
        let mut sorted = COMMON_AMBIGUOUS_NAMES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, COMMON_AMBIGUOUS_NAMES);
    }
}
