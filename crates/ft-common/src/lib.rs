//! Forecast tally common types and errors.
//!
//! This crate provides the foundational types shared across the workspace:
//! - The feed data model (records grouped into forecast and market sections)
//! - Common error types with stable codes and categories

pub mod error;
pub mod feed;

pub use error::{format_error_human, Error, ErrorCategory, Result};
pub use feed::{Feed, PercentBlock, Record, SectionKind};
