//! Redatta Core Types
//!
//! This crate provides the fundamental types used throughout Redatta:
//! - Entity labels and annotated spans
//! - The consolidated document value type
//! - Personal-data field definitions
//! - Core error types

pub mod error;
pub mod label;
pub mod personal;
pub mod span;

pub use error::{Error, Result};
pub use label::Label;
pub use personal::{PersonalData, PersonalField};
pub use span::{ConsolidatedDocument, Span};
