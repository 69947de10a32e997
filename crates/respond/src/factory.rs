//! Response builder factory and the scoped builder triad.

use std::collections::BTreeSet;
use std::sync::Arc;

use blstack_catalog::LogicCatalog;

use crate::envelope::{BlStackEntry, Layer, ResponseEnvelope};
use crate::error::UnknownMethodError;

/// Ordered, possibly multi-method scope for one builder request.
///
/// Built from a single name or an ordered list; order is preserved exactly as
/// supplied (duplicates included) and dictates `blStack` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodScope(Vec<String>);

impl MethodScope {
    pub fn methods(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for MethodScope {
    fn from(method: &str) -> Self {
        Self(vec![method.to_string()])
    }
}

impl From<String> for MethodScope {
    fn from(method: String) -> Self {
        Self(vec![method])
    }
}

impl From<Vec<String>> for MethodScope {
    fn from(methods: Vec<String>) -> Self {
        Self(methods)
    }
}

impl From<Vec<&str>> for MethodScope {
    fn from(methods: Vec<&str>) -> Self {
        Self(methods.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for MethodScope {
    fn from(methods: &[&str]) -> Self {
        Self(methods.iter().map(|m| m.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for MethodScope {
    fn from(methods: [&str; N]) -> Self {
        Self(methods.iter().map(|m| m.to_string()).collect())
    }
}

/// Factory bound to one catalog, one component name, and one layer.
///
/// Created once per owning component and reused for its lifetime. Each
/// [`ResponseBuilderFactory::builders`] call is stateless relative to prior
/// calls; nothing mutable is shared, so the factory is freely usable from
/// concurrent tasks.
#[derive(Debug, Clone)]
pub struct ResponseBuilderFactory {
    catalog: Arc<LogicCatalog>,
    service_name: String,
    layer: Layer,
}

impl ResponseBuilderFactory {
    pub fn new(catalog: Arc<LogicCatalog>, service_name: impl Into<String>, layer: Layer) -> Self {
        Self {
            catalog,
            service_name: service_name.into(),
            layer,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn catalog(&self) -> &LogicCatalog {
        &self.catalog
    }

    /// Produce the builder triad scoped to `scope`.
    ///
    /// Fails fast with [`UnknownMethodError`] when the scope is empty or
    /// names a method absent from the catalog; a degraded builder is never
    /// handed out. On success the union of codes legal across the scoped
    /// methods is computed once, backing the diagnostic check in
    /// [`ScopedBuilders`].
    pub fn builders(
        &self,
        scope: impl Into<MethodScope>,
    ) -> Result<ScopedBuilders<'_>, UnknownMethodError> {
        let MethodScope(methods) = scope.into();
        if methods.is_empty() {
            return Err(UnknownMethodError::EmptyScope);
        }

        let mut missing: Vec<String> = Vec::new();
        for method in &methods {
            if !self.catalog.contains_method(method) && !missing.contains(method) {
                missing.push(method.clone());
            }
        }
        if !missing.is_empty() {
            return Err(UnknownMethodError::Missing(missing));
        }

        let legal_codes = methods
            .iter()
            .flat_map(|method| self.catalog.codes_for(method))
            .map(str::to_string)
            .collect();

        Ok(ScopedBuilders {
            factory: self,
            methods,
            legal_codes,
        })
    }
}

/// The builder triad for one method scope: `build_success`, `build_failure`,
/// `throw_failure`, sharing one envelope-construction routine.
///
/// Ephemeral: borrow the factory, build the envelope(s) for one business
/// operation, drop.
#[derive(Debug)]
pub struct ScopedBuilders<'a> {
    factory: &'a ResponseBuilderFactory,
    methods: Vec<String>,
    /// Union of codes legal across the scoped methods (not the intersection):
    /// a code unique to one scoped method is still legal for the whole scope.
    legal_codes: BTreeSet<String>,
}

impl ScopedBuilders<'_> {
    /// The scoped method names, in the order supplied.
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Whether `code` is legal for at least one scoped method.
    pub fn is_legal_code(&self, code: &str) -> bool {
        self.legal_codes.contains(code)
    }

    /// Success envelope without payload.
    pub fn build_success(&self, code: &str) -> ResponseEnvelope {
        self.envelope(code, true, None)
    }

    /// Success envelope carrying `data`.
    pub fn build_success_with<D>(&self, code: &str, data: D) -> ResponseEnvelope<D> {
        self.envelope(code, true, Some(data))
    }

    /// Failure envelope without payload. Never fails; an unrecognized code
    /// merely yields an empty trace.
    pub fn build_failure(&self, code: &str) -> ResponseEnvelope {
        self.envelope(code, false, None)
    }

    /// Failure envelope carrying `data`.
    pub fn build_failure_with<D>(&self, code: &str, data: D) -> ResponseEnvelope<D> {
        self.envelope(code, false, Some(data))
    }

    /// Abort the call chain: apply `exception` to `code` and return it as
    /// `Err` immediately. No envelope is built; the error's payload is
    /// exactly the code, and translating it into a transport response is the
    /// caller's concern.
    pub fn throw_failure<T, E>(
        &self,
        exception: impl FnOnce(String) -> E,
        code: &str,
    ) -> Result<T, E> {
        self.check_code(code);
        Err(exception(code.to_string()))
    }

    /// Shared envelope construction.
    ///
    /// Walks the scoped methods in order and appends a trace entry for each
    /// one whose catalog entry contains `code`; methods that do not recognize
    /// the code are skipped silently. The trace is diagnostic, not a validity
    /// gate, so the call succeeds even when no scoped method recognizes the
    /// code.
    fn envelope<D>(&self, code: &str, success: bool, data: Option<D>) -> ResponseEnvelope<D> {
        self.check_code(code);

        let mut bl_stack = Vec::new();
        for method in &self.methods {
            if let Some(record) = self.factory.catalog.record(method, code) {
                bl_stack.push(BlStackEntry {
                    method: method.clone(),
                    message: record.default_message().to_string(),
                });
            }
        }

        ResponseEnvelope {
            success,
            service_name: self.factory.service_name.clone(),
            layer: self.factory.layer,
            code: code.to_string(),
            bl_stack,
            data,
        }
    }

    /// Diagnostic check against the precomputed code union. Log-only: a code
    /// outside the union still produces an envelope (with an empty trace).
    fn check_code(&self, code: &str) {
        if !self.legal_codes.contains(code) {
            tracing::warn!(
                code,
                methods = ?self.methods,
                service_name = %self.factory.service_name,
                layer = %self.factory.layer,
                "result code is not legal for any scoped method",
            );
        }
    }
}
