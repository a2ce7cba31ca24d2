//! Query options handed to the site's full-text index.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How multiple query words combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolMode {
    #[default]
    And,
    Or,
}

/// Per-field search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    pub boost: f32,
}

/// Options for a single index query.
///
/// Serializes to the option object the index library accepts
/// (`{"bool": "AND", "expand": true, "fields": {...}}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub bool: BoolMode,
    /// Partial word search
    pub expand: bool,
    pub fields: BTreeMap<String, FieldOptions>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        let fields = BTreeMap::from([
            ("title".to_string(), FieldOptions { boost: 2.0 }),
            ("body".to_string(), FieldOptions { boost: 1.0 }),
        ]);
        Self {
            bool: BoolMode::And,
            expand: true,
            fields,
        }
    }
}

impl SearchOptions {
    pub fn boost(&self, field: &str) -> Option<f32> {
        self.fields.get(field).map(|f| f.boost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_default_options_json_shape() {
        let json = serde_json::to_value(SearchOptions::default()).unwrap();
        check!(
            json == serde_json::json!({
                "bool": "AND",
                "expand": true,
                "fields": {
                    "body": { "boost": 1.0 },
                    "title": { "boost": 2.0 }
                }
            })
        );
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: SearchOptions = serde_json::from_str(r#"{"bool": "OR"}"#).unwrap();
        check!(options.bool == BoolMode::Or);
        check!(options.expand);
        check!(options.boost("title") == Some(2.0));
        check!(options.boost("tags").is_none());
    }
}
