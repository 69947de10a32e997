//! Builder wiring errors.

use thiserror::Error;

/// A builder scope referenced method names the catalog does not know.
///
/// This is a caller/programmer defect surfaced at wiring time: the factory
/// refuses to hand out a partially-functional builder. Graceful degradation
/// is reserved for *codes* (an unrecognized code merely shortens the trace);
/// method names must exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownMethodError {
    /// The scope contained no method names at all.
    #[error("builder scope is empty")]
    EmptyScope,

    /// One or more scoped names are absent from the catalog.
    #[error("unknown business method(s): {}", .0.join(", "))]
    Missing(Vec<String>),
}
