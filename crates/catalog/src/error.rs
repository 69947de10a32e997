//! Catalog error model.
//!
//! All of these surface at catalog construction/deserialization time, before
//! any business call depends on the catalog. Nothing here is recoverable at
//! the call site; a malformed catalog is a wiring defect.

use thiserror::Error;

/// A single localized message record is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LangRecordError {
    /// The record has no message for the default `en` language.
    #[error("missing the default `en` message")]
    MissingDefault,

    /// A message string is empty.
    #[error("message for language `{0}` is empty")]
    EmptyMessage(String),

    /// A language tag is empty.
    #[error("empty language tag")]
    EmptyTag,
}

/// The catalog violates a structural invariant.
///
/// Raised eagerly when a catalog is built or deserialized; never lazily from
/// inside a response-building call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedCatalogError {
    /// A method name is the empty string.
    #[error("method name is empty")]
    EmptyMethodName,

    /// A business method declares no result codes at all.
    #[error("business method `{method}` has no result codes")]
    NoCodes { method: String },

    /// A result code under `method` is the empty string.
    #[error("business method `{method}` has an empty result code")]
    EmptyCode { method: String },

    /// The message record for `(method, code)` is malformed.
    #[error("message record for `{method}.{code}` is malformed")]
    Record {
        method: String,
        code: String,
        source: LangRecordError,
    },
}
