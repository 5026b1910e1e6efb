//! Secrets file.
//!
//! The secrets file is a JSON object of named credentials. Lookups of keys
//! that are absent or `null` yield `None`; only an unreadable or malformed
//! file is an error.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::StoreError;

/// Named credentials, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    values: HashMap<String, String>,
}

impl Secrets {
    /// Loads secrets from a JSON file.
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        debug!(path = %path.display(), "Loading secrets");
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&content)
    }

    /// Parses secrets from a JSON string.
    ///
    /// Non-string scalars are kept in their JSON text form.
    pub fn from_json_str(content: &str) -> Result<Self, StoreError> {
        let parsed: Value = serde_json::from_str(content)
            .map_err(|e| StoreError::MalformedSecrets(e.to_string()))?;

        let Value::Object(map) = parsed else {
            return Err(StoreError::MalformedSecrets(
                "expected a JSON object".to_string(),
            ));
        };

        let values = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect();

        Ok(Self { values })
    }

    /// Looks up a secret by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the number of secrets with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no secret has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let secrets = Secrets::from_json_str(r#"{"nasa_api_key": "abc123"}"#).unwrap();
        assert_eq!(secrets.get("nasa_api_key"), Some("abc123"));
        assert_eq!(secrets.get("other_key"), None);
    }

    #[test]
    fn test_null_and_scalars() {
        let secrets = Secrets::from_json_str(r#"{"a": null, "b": 42, "c": true}"#).unwrap();
        assert_eq!(secrets.get("a"), None);
        assert_eq!(secrets.get("b"), Some("42"));
        assert_eq!(secrets.get("c"), Some("true"));
        assert_eq!(secrets.len(), 2);
    }

    #[test]
    fn test_malformed() {
        let err = Secrets::from_json_str("{ nasa_api_key: ").unwrap_err();
        assert!(matches!(err, StoreError::MalformedSecrets(_)));

        let err = Secrets::from_json_str(r#"["abc"]"#).unwrap_err();
        assert!(matches!(err, StoreError::MalformedSecrets(_)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("secrets.json");
        tokio::fs::write(&path, r#"{"nasa_api_key": "k"}"#).await.unwrap();

        let secrets = Secrets::load(&path).await.unwrap();
        assert_eq!(secrets.get("nasa_api_key"), Some("k"));
    }
}
