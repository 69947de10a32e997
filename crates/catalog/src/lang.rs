//! Language tags and localized message records.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::LangRecordError;

/// Language tag naming one locale of a message record.
///
/// Tags are opaque strings at this layer (`"zh"`, `"pt"`, `"sv"`, ...); the
/// only tag with special meaning is [`LangTag::EN`], the default language
/// every record must carry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangTag(Cow<'static, str>);

impl LangTag {
    /// The designated default language.
    pub const EN: LangTag = LangTag(Cow::Borrowed("en"));

    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == "en"
    }
}

impl core::fmt::Display for LangTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for LangTag {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LangTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Localized messages for one result code.
///
/// # Invariants
/// - The default `en` message is always present (guaranteed structurally:
///   it lives in its own field).
/// - No tag and no message is empty. Enforced by [`LangRecord::validate`],
///   which runs on deserialization and again on catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<LangTag, String>")]
pub struct LangRecord {
    en: String,
    extra: BTreeMap<LangTag, String>,
}

impl LangRecord {
    /// Create a record from its default-language message.
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Add (or replace) the message for one more language.
    #[must_use]
    pub fn with(mut self, tag: impl Into<LangTag>, message: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.is_default() {
            self.en = message.into();
        } else {
            self.extra.insert(tag, message.into());
        }
        self
    }

    /// The message in the default language.
    ///
    /// This is the projection used for every `blStack` entry.
    pub fn default_message(&self) -> &str {
        &self.en
    }

    /// The message for an arbitrary language, if present.
    pub fn message(&self, tag: &LangTag) -> Option<&str> {
        if tag.is_default() {
            Some(&self.en)
        } else {
            self.extra.get(tag).map(String::as_str)
        }
    }

    /// All languages the record carries, default language first.
    pub fn langs(&self) -> impl Iterator<Item = &LangTag> {
        std::iter::once(&LangTag::EN).chain(self.extra.keys())
    }

    /// Check the non-structural invariants (no empty tags, no empty messages).
    pub fn validate(&self) -> Result<(), LangRecordError> {
        if self.en.is_empty() {
            return Err(LangRecordError::EmptyMessage("en".to_string()));
        }
        for (tag, message) in &self.extra {
            if tag.as_str().is_empty() {
                return Err(LangRecordError::EmptyTag);
            }
            if message.is_empty() {
                return Err(LangRecordError::EmptyMessage(tag.to_string()));
            }
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<LangTag, String>> for LangRecord {
    type Error = LangRecordError;

    fn try_from(mut messages: BTreeMap<LangTag, String>) -> Result<Self, Self::Error> {
        let en = messages
            .remove(&LangTag::EN)
            .ok_or(LangRecordError::MissingDefault)?;
        let record = Self {
            en,
            extra: messages,
        };
        record.validate()?;
        Ok(record)
    }
}

// Serialized as a plain tag → message map, `en` included.
impl Serialize for LangRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut messages = self.extra.clone();
        messages.insert(LangTag::EN, self.en.clone());
        messages.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carries_the_default_message() {
        let record = LangRecord::new("Find users successfully");
        assert_eq!(record.default_message(), "Find users successfully");
        assert_eq!(
            record.message(&LangTag::EN),
            Some("Find users successfully")
        );
    }

    #[test]
    fn with_adds_other_languages_without_touching_en() {
        let record = LangRecord::new("Duplicated").with("zh", "重复了");
        assert_eq!(record.default_message(), "Duplicated");
        assert_eq!(record.message(&LangTag::new("zh")), Some("重复了"));
        assert_eq!(record.message(&LangTag::new("fr")), None);
    }

    #[test]
    fn with_en_replaces_the_default_message() {
        let record = LangRecord::new("old").with("en", "new");
        assert_eq!(record.default_message(), "new");
    }

    #[test]
    fn deserialization_requires_en() {
        let err = serde_json::from_str::<LangRecord>(r#"{"zh":"重复了"}"#).unwrap_err();
        assert!(err.to_string().contains("missing the default `en` message"));
    }

    #[test]
    fn deserialization_rejects_empty_messages() {
        let err = serde_json::from_str::<LangRecord>(r#"{"en":"ok","zh":""}"#).unwrap_err();
        assert!(err.to_string().contains("is empty"));
    }

    #[test]
    fn serialization_round_trips() {
        let record = LangRecord::new("User not found").with("zh", "未找到用户");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"en": "User not found", "zh": "未找到用户"})
        );
        let back: LangRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn langs_lists_default_first() {
        let record = LangRecord::new("ok").with("zh", "好").with("de", "gut");
        let langs: Vec<&str> = record.langs().map(LangTag::as_str).collect();
        assert_eq!(langs, vec!["en", "de", "zh"]);
    }
}
