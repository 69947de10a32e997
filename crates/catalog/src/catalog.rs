//! The logic catalog: method name → result code → localized messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::MalformedCatalogError;
use crate::lang::LangRecord;

type CodeTable = BTreeMap<String, LangRecord>;

/// Immutable table of legal `(method, code)` combinations.
///
/// The catalog is the single source of truth for which result codes a
/// business method may report. It is constructed once (validated eagerly),
/// shared read-only for the lifetime of the process, and exposes no mutating
/// operation.
///
/// # Invariants
/// - Every method has at least one result code.
/// - Every code maps to a [`LangRecord`], which always carries the default
///   `en` message.
/// - No method name and no code is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, CodeTable>")]
pub struct LogicCatalog {
    methods: BTreeMap<String, CodeTable>,
}

impl LogicCatalog {
    /// Start a fluent [`CatalogBuilder`].
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up the message record for `(method, code)`, if that combination
    /// is legal.
    pub fn record(&self, method: &str, code: &str) -> Option<&LangRecord> {
        self.methods.get(method).and_then(|codes| codes.get(code))
    }

    /// Whether `method` is known to the catalog.
    pub fn contains_method(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// The result codes legal for `method`. Empty for unknown methods.
    pub fn codes_for(&self, method: &str) -> impl Iterator<Item = &str> {
        self.methods
            .get(method)
            .into_iter()
            .flat_map(|codes| codes.keys().map(String::as_str))
    }

    /// All method names, in deterministic (sorted) order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl TryFrom<BTreeMap<String, CodeTable>> for LogicCatalog {
    type Error = MalformedCatalogError;

    fn try_from(methods: BTreeMap<String, CodeTable>) -> Result<Self, Self::Error> {
        for (method, codes) in &methods {
            if method.is_empty() {
                return Err(MalformedCatalogError::EmptyMethodName);
            }
            if codes.is_empty() {
                return Err(MalformedCatalogError::NoCodes {
                    method: method.clone(),
                });
            }
            for (code, record) in codes {
                if code.is_empty() {
                    return Err(MalformedCatalogError::EmptyCode {
                        method: method.clone(),
                    });
                }
                record
                    .validate()
                    .map_err(|source| MalformedCatalogError::Record {
                        method: method.clone(),
                        code: code.clone(),
                        source,
                    })?;
            }
        }
        Ok(Self { methods })
    }
}

// Serialized as the plain nested map it conceptually is.
impl Serialize for LogicCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.methods.serialize(serializer)
    }
}

/// Fluent construction of a [`LogicCatalog`].
///
/// Entries may be added in any order; [`CatalogBuilder::build`] runs the full
/// invariant validation and is the only way to obtain the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    methods: BTreeMap<String, CodeTable>,
}

impl CatalogBuilder {
    /// Declare that `method` may report `code`, carrying `record`.
    ///
    /// Re-declaring the same `(method, code)` pair replaces the record.
    #[must_use]
    pub fn code(
        mut self,
        method: impl Into<String>,
        code: impl Into<String>,
        record: LangRecord,
    ) -> Self {
        self.methods
            .entry(method.into())
            .or_default()
            .insert(code.into(), record);
        self
    }

    pub fn build(self) -> Result<LogicCatalog, MalformedCatalogError> {
        LogicCatalog::try_from(self.methods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::LangRecord;
    use proptest::prelude::*;

    fn sample() -> LogicCatalog {
        LogicCatalog::builder()
            .code(
                "createUser",
                "EMAIL_ALREADY_EXISTS",
                LangRecord::new("Email already exists").with("zh", "电子邮件已存在"),
            )
            .code("createUser", "DUPLICATED", LangRecord::new("Duplicated"))
            .code("deleteUser", "DUPLICATED", LangRecord::new("Duplicated"))
            .code(
                "deleteUser",
                "USER_NOT_FOUND",
                LangRecord::new("User not found"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn record_lookup_for_legal_pairs() {
        let catalog = sample();
        let record = catalog.record("createUser", "EMAIL_ALREADY_EXISTS").unwrap();
        assert_eq!(record.default_message(), "Email already exists");
    }

    #[test]
    fn record_lookup_for_illegal_pairs_is_none() {
        let catalog = sample();
        assert!(catalog.record("createUser", "USER_NOT_FOUND").is_none());
        assert!(catalog.record("unknownMethod", "DUPLICATED").is_none());
    }

    #[test]
    fn codes_for_lists_all_codes_of_a_method() {
        let catalog = sample();
        let codes: Vec<&str> = catalog.codes_for("createUser").collect();
        assert_eq!(codes, vec!["DUPLICATED", "EMAIL_ALREADY_EXISTS"]);
        assert_eq!(catalog.codes_for("unknownMethod").count(), 0);
    }

    #[test]
    fn empty_catalog_is_legal() {
        let catalog = LogicCatalog::builder().build().unwrap();
        assert!(catalog.is_empty());
        assert!(!catalog.contains_method("anything"));
    }

    #[test]
    fn empty_method_name_is_rejected() {
        let err = LogicCatalog::builder()
            .code("", "OK", LangRecord::new("ok"))
            .build()
            .unwrap_err();
        assert_eq!(err, MalformedCatalogError::EmptyMethodName);
    }

    #[test]
    fn empty_code_is_rejected() {
        let err = LogicCatalog::builder()
            .code("login", "", LangRecord::new("ok"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            MalformedCatalogError::EmptyCode {
                method: "login".to_string()
            }
        );
    }

    #[test]
    fn empty_default_message_is_rejected() {
        let err = LogicCatalog::builder()
            .code("login", "OK", LangRecord::new(""))
            .build()
            .unwrap_err();
        assert!(matches!(err, MalformedCatalogError::Record { .. }));
    }

    #[test]
    fn deserialization_validates_method_invariants() {
        let err = serde_json::from_str::<LogicCatalog>(r#"{"login":{}}"#).unwrap_err();
        assert!(err.to_string().contains("has no result codes"));
    }

    #[test]
    fn deserialization_validates_record_invariants() {
        let err =
            serde_json::from_str::<LogicCatalog>(r#"{"login":{"OK":{"zh":"好"}}}"#).unwrap_err();
        assert!(err.to_string().contains("missing the default `en` message"));
    }

    #[test]
    fn serialization_round_trips() {
        let catalog = sample();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: LogicCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    proptest! {
        /// Property: any non-degenerate raw table builds, and every raw entry
        /// is visible through the read API with its `en` message intact.
        #[test]
        fn built_catalog_agrees_with_its_raw_table(
            raw in prop::collection::btree_map(
                "[a-z]{1,8}",
                prop::collection::btree_map("[A-Z][A-Z_]{0,10}", "[a-zA-Z ]{1,20}", 1..4),
                0..5,
            )
        ) {
            let mut builder = LogicCatalog::builder();
            for (method, codes) in &raw {
                for (code, en) in codes {
                    builder = builder.code(method.clone(), code.clone(), LangRecord::new(en.clone()));
                }
            }
            let catalog = builder.build().unwrap();

            prop_assert_eq!(catalog.len(), raw.len());
            for (method, codes) in &raw {
                prop_assert!(catalog.contains_method(method));
                prop_assert_eq!(catalog.codes_for(method).count(), codes.len());
                for (code, en) in codes {
                    let record = catalog.record(method, code).unwrap();
                    prop_assert_eq!(record.default_message(), en.as_str());
                }
            }
        }
    }
}
