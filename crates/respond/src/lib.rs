//! `blstack-respond` — layered business-logic response envelopes.
//!
//! Each business-logic layer (service, controller) reports structured,
//! localized, traceable success/failure outcomes. A
//! [`ResponseBuilderFactory`] is bound to one [`LogicCatalog`]
//! (the table of legal `(method, code)` pairs), one component name, and one
//! [`Layer`]; per business operation it hands out builders scoped to that
//! operation's method name(s), which assemble [`ResponseEnvelope`] values
//! carrying a trace of which scoped methods recognized the outcome code.
//!
//! Everything here is synchronous and stateless across calls: the only shared
//! value is the catalog, which is read-only after construction.
//!
//! [`LogicCatalog`]: blstack_catalog::LogicCatalog

pub mod envelope;
pub mod error;
pub mod factory;

pub use envelope::{BlStackEntry, Layer, ResponseEnvelope};
pub use error::UnknownMethodError;
pub use factory::{MethodScope, ResponseBuilderFactory, ScopedBuilders};
