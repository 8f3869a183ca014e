//! Pattern detectors
//!
//! Each detector is a pure function of the input text: it emits candidate
//! spans with one fixed label and never errors on well-formed text. All
//! patterns are compiled once at construction; detector instances are
//! built by the pipeline and reused across requests.

mod code;
mod mail;
mod phone;
mod province;
mod url;

pub use code::CodeDetector;
pub use mail::MailDetector;
pub use phone::PhoneDetector;
pub use province::ProvinceDetector;
pub use url::UrlDetector;

use redatta_core::Span;

/// A stateless candidate-span detector over one text.
pub trait Detector: Send + Sync {
    /// Scan `text` and return zero or more candidate spans.
    fn detect(&self, text: &str) -> Vec<Span>;
}

#[cfg(test)]
mod tests;
