use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Record keys come from the backend as opaque strings, so implementors are
/// `Clone` rather than `Copy`.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Validates an opaque record key and returns its trimmed form.
///
/// Keys are non-empty and made of ASCII letters, digits, `-` and `_`.
pub fn validate_record_key(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Invalid record key: empty".to_string());
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!("Invalid record key '{}': unexpected '{}'", trimmed, bad));
    }
    Ok(trimmed.to_string())
}
