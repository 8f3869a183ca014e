//! Redatta Rule Layer
//!
//! The deterministic half of the anonymization pipeline:
//! - regex detectors for mail, phone, URL, code and province spans
//! - dictionary matching with the capitalization/context ambiguity guard
//! - verbatim matching of caller-supplied personal data
//! - consolidation of all candidate spans into one non-overlapping set
//! - rendering of `[LABEL]` redaction tags
//!
//! Candidate spans from the statistical recognizer enter through
//! [`Anonymizer::annotate`] and are consolidated together with everything
//! the rule layer finds.

mod context;

pub mod detect;
pub mod dictionary;
pub mod merge;
pub mod overrides;
pub mod pipeline;
pub mod render;

pub use detect::Detector;
pub use dictionary::DictionaryMatcher;
pub use merge::consolidate;
pub use overrides::OverrideMatcher;
pub use pipeline::{Anonymizer, RuleConfig};
pub use render::redact;
