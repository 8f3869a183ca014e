//! Redatta Lexicons
//!
//! Word lists backing the dictionary matcher. Each entity category ships as
//! two newline-delimited UTF-8 files: entries that are safe to match
//! anywhere, and entries that are also ordinary Italian vocabulary and need
//! a context guard. Lexicons are loaded once at startup and shared
//! read-only across requests.

pub mod category;
pub mod loader;
pub mod names;

pub use category::Category;
pub use loader::{CategoryLexicon, Lexicon, WordList};
pub use names::COMMON_AMBIGUOUS_NAMES;
