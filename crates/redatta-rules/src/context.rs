//! Preceding/following context inspection
//!
//! The source patterns used regex lookaround for these checks; lookbehind
//! is not portable across engines, so every guard here inspects the
//! neighboring characters explicitly.

/// Word characters in the `\w` sense, Unicode-aware.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Character immediately before byte offset `at`, if any.
pub(crate) fn char_before(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

/// Character immediately at byte offset `at`, if any.
pub(crate) fn char_after(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}

/// Punctuation that ends a sentence for the ambiguity guard.
const SENTENCE_PUNCTUATION: &[char] = &['.', '!', '?', ':', ';', '·', '…', '»', '›'];

/// Whether the position `at` looks like the start of a sentence.
///
/// True when the match is at the very start of the text, follows a blank
/// line, or follows sentence-ending punctuation plus optional whitespace.
/// A capitalized dictionary word in such a position is most likely an
/// ordinary word capitalized by sentence casing, not a proper noun.
pub(crate) fn at_sentence_start(text: &str, at: usize) -> bool {
    let mut newlines = 0usize;
    for c in text[..at].chars().rev() {
        if c == '\n' {
            newlines += 1;
            if newlines >= 2 {
                return true;
            }
            continue;
        }
        if c.is_whitespace() {
            continue;
        }
        return SENTENCE_PUNCTUATION.contains(&c);
    }
    // Ran out of preceding text: start of document.
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_text_is_sentence_start() {
        assert!(at_sentence_start("Marco corre", 0));
    }

    #[test]
    fn after_period_is_sentence_start() {
        let text = "Va bene. Marco corre";
        assert!(at_sentence_start(text, text.find("Marco").unwrap()));
    }

    #[test]
    fn after_blank_line_is_sentence_start() {
        let text = "prima riga\n\nMarco corre";
        assert!(at_sentence_start(text, text.find("Marco").unwrap()));
    }

    #[test]
    fn mid_sentence_is_not_sentence_start() {
        let text = "il signor Marco corre";
        assert!(!at_sentence_start(text, text.find("Marco").unwrap()));
    }

    #[test]
    fn single_newline_is_not_sentence_start() {
        let text = "prima riga\nMarco corre";
        assert!(!at_sentence_start(text, text.find("Marco").unwrap()));
    }

    #[test]
    fn newline_after_period_is_sentence_start() {
        let text = "Fine.\nMarco corre";
        assert!(at_sentence_start(text, text.find("Marco").unwrap()));
    }
}
