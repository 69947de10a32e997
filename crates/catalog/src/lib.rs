//! `blstack-catalog` — authoritative table of business-logic outcomes.
//!
//! This crate contains **pure data** (no IO, no transport): for each business
//! method, the set of result codes it may report and the localized message
//! attached to each code. The catalog is built once, validated eagerly, and
//! never mutated afterwards.

pub mod catalog;
pub mod error;
pub mod lang;

mod macros;

pub use catalog::{CatalogBuilder, LogicCatalog};
pub use error::{LangRecordError, MalformedCatalogError};
pub use lang::{LangRecord, LangTag};
