//! Source name validation and the global icon name registry.

use serde_json::{Map, Value};
use std::ffi::OsStr;

use super::IconError;

/// Cyrillic letters are rejected in every source name.
#[inline]
const fn is_forbidden(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'Ё' | 'ё')
}

/// Fail with [`IconError::InvalidName`] if `name` contains a forbidden character.
pub fn reject_forbidden_characters(name: &str) -> Result<(), IconError> {
    if name.chars().any(is_forbidden) {
        return Err(IconError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validate a raw directory entry name and return it as `&str`.
///
/// Names that are not valid UTF-8 are rejected as invalid too.
pub fn validated_name(name: &OsStr) -> Result<&str, IconError> {
    let name = name
        .to_str()
        .ok_or_else(|| IconError::InvalidName(name.to_string_lossy().into_owned()))?;
    reject_forbidden_characters(name)?;
    Ok(name)
}

/// Icon name → category mapping, in registration order.
///
/// Icon names form one flat namespace even though sources are grouped by
/// category, so a name may be registered only once.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NameRegistry {
    names: Map<String, Value>,
}

impl NameRegistry {
    /// Register `name` under `category`, consuming the registry.
    ///
    /// Fails with [`IconError::DuplicateName`] naming both categories when
    /// the name is already taken.
    pub fn register(mut self, name: &str, category: &str) -> Result<Self, IconError> {
        if let Some(existing) = self.category_of(name) {
            return Err(IconError::DuplicateName {
                name: name.to_string(),
                category: category.to_string(),
                existing: existing.to_string(),
            });
        }
        self.names
            .insert(name.to_string(), Value::String(category.to_string()));
        Ok(self)
    }

    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.names.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// `(name, category)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(name, category)| (name.as_str(), category.as_str().unwrap_or_default()))
    }

    /// The mapping as a JSON object, ready for serialization.
    pub fn as_json(&self) -> &Map<String, Value> {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_cyrillic() {
        for name in ["стрелка.svg", "arrow_Ж.svg", "ёлка", "Ёж"] {
            assert_eq!(
                reject_forbidden_characters(name),
                Err(IconError::InvalidName(name.to_string())),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_latin_and_other_scripts() {
        for name in ["arrow_up_24px.svg", "Arrows", "café.svg", "箭头.svg"] {
            assert!(reject_forbidden_characters(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_validated_name() {
        assert_eq!(validated_name(OsStr::new("Arrows")), Ok("Arrows"));
        assert!(validated_name(OsStr::new("Стрелки")).is_err());
    }

    #[test]
    fn test_registry_fold_keeps_order() {
        let registry = [("b-icon", "b"), ("a-icon", "a"), ("c-icon", "b")]
            .into_iter()
            .try_fold(NameRegistry::default(), |reg, (name, category)| {
                reg.register(name, category)
            })
            .unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["b-icon", "a-icon", "c-icon"]
        );
        assert_eq!(registry.category_of("c-icon"), Some("b"));
    }

    #[test]
    fn test_registry_rejects_duplicate_across_categories() {
        let registry = NameRegistry::default().register("icon", "a").unwrap();
        let err = registry.register("icon", "b").unwrap_err();
        assert_eq!(
            err,
            IconError::DuplicateName {
                name: "icon".into(),
                category: "b".into(),
                existing: "a".into(),
            }
        );
    }
}
