//! Unresolved configuration input.
//!
//! [`RawConfiguration`] is what a user wrote: every property optional, values
//! untyped. [`Configuration`] is the typed view of the same surface, including
//! the properties owned by the host tool and the plugin system.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::constants::ConfigProperty;
use crate::error::{Error, Result};
use crate::resolved::ResolvedConfiguration;

/// A partially-specified configuration as supplied by the user.
///
/// Properties keep the order in which they were inserted or appeared in the
/// source document, which is also the order excess-property diagnostics are
/// reported in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConfiguration {
    properties: Map<String, Value>,
}

impl RawConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a property, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl From<Map<String, Value>> for RawConfiguration {
    fn from(properties: Map<String, Value>) -> Self {
        Self { properties }
    }
}

impl TryFrom<Value> for RawConfiguration {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(properties) => Ok(Self { properties }),
            other => Err(Error::not_an_object(&other)),
        }
    }
}

/// Feed a resolved configuration back in as input.
///
/// `newlineKind` is written with its input spelling (`crlf`, `lf`, `auto`) so
/// that resolving the result again reproduces the same configuration.
impl From<&ResolvedConfiguration> for RawConfiguration {
    fn from(resolved: &ResolvedConfiguration) -> Self {
        RawConfiguration::new()
            .with(ConfigProperty::LineWidth.as_str(), Value::Number(resolved.line_width.clone()))
            .with(ConfigProperty::IndentWidth.as_str(), Value::Number(resolved.indent_width.clone()))
            .with(ConfigProperty::UseTabs.as_str(), Value::from(resolved.use_tabs))
            .with(
                ConfigProperty::NewlineKind.as_str(),
                Value::from(resolved.newline_kind.input_spelling()),
            )
    }
}

/// Typed view of the full configuration surface.
///
/// The formatter's own properties are validated by the resolver; `projectType`
/// and `plugins` belong to external collaborators and are carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_width: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    /// One of `auto`, `crlf`, `lf` or `system`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newline_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<Value>>,
}

impl From<Configuration> for RawConfiguration {
    fn from(config: Configuration) -> Self {
        let mut raw = RawConfiguration::new();
        if let Some(line_width) = config.line_width {
            raw.insert(ConfigProperty::LineWidth.as_str(), Value::Number(line_width));
        }
        if let Some(indent_width) = config.indent_width {
            raw.insert(ConfigProperty::IndentWidth.as_str(), Value::Number(indent_width));
        }
        if let Some(use_tabs) = config.use_tabs {
            raw.insert(ConfigProperty::UseTabs.as_str(), Value::from(use_tabs));
        }
        if let Some(newline_kind) = config.newline_kind {
            raw.insert(ConfigProperty::NewlineKind.as_str(), Value::from(newline_kind));
        }
        if let Some(project_type) = config.project_type {
            raw.insert(ConfigProperty::ProjectType.as_str(), Value::from(project_type));
        }
        if let Some(plugins) = config.plugins {
            raw.insert(ConfigProperty::Plugins.as_str(), Value::Array(plugins));
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_names_match_configuration_fields() {
        let config = Configuration {
            project_type: Some("library".to_string()),
            plugins: Some(vec![json!("typescript")]),
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec![
                ConfigProperty::ProjectType.as_str(),
                ConfigProperty::Plugins.as_str()
            ]
        );
    }

    #[test]
    fn test_known_names_match_configuration_fields() {
        let config = Configuration {
            line_width: Some(Number::from(80)),
            indent_width: Some(Number::from(2)),
            use_tabs: Some(true),
            newline_kind: Some("lf".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        let object = value.as_object().unwrap();

        for property in ConfigProperty::KNOWN {
            assert!(object.contains_key(property.as_str()), "missing {property}");
        }
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let raw = RawConfiguration::new()
            .with("zeta", json!(1))
            .with("alpha", json!(2))
            .with("mid", json!(3));

        let names: Vec<&str> = raw.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        let err = RawConfiguration::try_from(json!("lineWidth")).unwrap_err();
        assert!(matches!(err, Error::NotAnObject { found: "a string" }));
    }

    #[test]
    fn test_try_from_object() {
        let raw = RawConfiguration::try_from(json!({ "lineWidth": 80 })).unwrap();
        assert_eq!(raw.get("lineWidth"), Some(&json!(80)));
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn test_from_configuration_skips_absent_fields() {
        let raw = RawConfiguration::from(Configuration {
            use_tabs: Some(false),
            ..Default::default()
        });

        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("useTabs"), Some(&json!(false)));
    }

    #[test]
    fn test_deserialize_is_transparent() {
        let raw: RawConfiguration =
            serde_json::from_str(r#"{"indentWidth": 2, "foo": [1]}"#).unwrap();
        assert_eq!(raw.get("indentWidth"), Some(&json!(2)));
        assert_eq!(raw.get("foo"), Some(&json!([1])));
    }
}
