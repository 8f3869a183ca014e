//! Error types for Redatta Core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid span: start {start} must be less than end {end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("span [{start}, {end}) out of bounds for text of {len} bytes")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    #[error("span [{start}, {end}) does not fall on character boundaries")]
    SpanNotOnCharBoundary { start: usize, end: usize },

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("automaton error: {0}")]
    Automaton(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
