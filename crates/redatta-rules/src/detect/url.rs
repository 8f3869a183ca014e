//! URL detector

use crate::detect::Detector;
use redatta_core::{Label, Result, Span};
use regex::Regex;

/// Top-level domains accepted for bare (scheme-less) domains.
const TLDS: &str = "com|org|net|edu|gov|mil|io|ai|it|fr|de|uk|us|co|info|biz|\
name|me|tv|cc|dev|app|tech|mobi|xyz|online|store|pro|int|\
eu|es|pt|ch|be|nl|se|no|dk|fi|ru";

/// Detects URLs, label URL.
///
/// Scheme and `www.` are optional: clinical notes write URLs informally,
/// so a bare `example.it/percorso` must still match.
pub struct UrlDetector {
    pattern: Regex,
}

impl UrlDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&format!(
            r#"(?xi)
            (?: (?:https?|ftps?):// | // )?          # optional scheme or protocol-relative
            (?: www\. )?                             # optional www.
            (?: [A-Za-z0-9._%+-]+(?::[^\s@]*)?@ )?   # optional user:pass@
            (?:
                (?: [A-Za-z0-9](?:[A-Za-z0-9-]{{0,61}}[A-Za-z0-9])?\. )+(?:{TLDS})  # domain
              |
                \d{{1,3}}(?:\.\d{{1,3}}){{3}}        # IPv4
              |
                \[[0-9A-Fa-f:.]+\]                   # IPv6
            )
            (?: :\d{{2,5}} )?                        # optional port
            (?: [/?\#][^\s<>"]* )?                   # path, query, fragment
            "#
        ))?;
        Ok(Self { pattern })
    }
}

impl Detector for UrlDetector {
    fn detect(&self, text: &str) -> Vec<Span> {
        self.pattern
            .find_iter(text)
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
                label: Label::Url,
            })
            .collect()
    }
}
