//! Diagnostics produced while resolving a configuration.
//!
//! Diagnostics are advisory. The resolved configuration is always complete;
//! whether a diagnostic should fail a run is up to the caller.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::resolved::ResolvedConfiguration;

/// What went wrong with a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A known property held a value of the wrong type (`expected` is
    /// `"number"` or `"boolean"`).
    InvalidType { expected: &'static str },
    /// A known enumerated property held a value outside its allowed set.
    UnknownValue,
    /// The property is not recognized at all.
    UnexpectedProperty,
}

impl DiagnosticKind {
    pub fn is_unexpected_property(&self) -> bool {
        matches!(self, Self::UnexpectedProperty)
    }
}

/// One problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationDiagnostic {
    pub property_name: String,
    pub message: String,
    #[serde(skip)]
    pub kind: DiagnosticKind,
}

impl ConfigurationDiagnostic {
    /// A known property whose value failed its type check.
    pub fn invalid_type(property_name: &str, expected: &'static str, value: &Value) -> Self {
        Self {
            property_name: property_name.to_string(),
            message: format!(
                "Expected the configuration for '{property_name}' to be a {expected}, but its value was: {}",
                render_value(value)
            ),
            kind: DiagnosticKind::InvalidType { expected },
        }
    }

    /// A known enumerated property with a value outside its allowed set.
    pub fn unknown_value(property_name: &str, value: &Value) -> Self {
        Self {
            property_name: property_name.to_string(),
            message: format!(
                "Unknown configuration specified for '{property_name}': {}",
                render_value(value)
            ),
            kind: DiagnosticKind::UnknownValue,
        }
    }

    /// A property nobody recognizes.
    pub fn unexpected_property(property_name: &str) -> Self {
        Self {
            property_name: property_name.to_string(),
            message: format!("Unexpected property in configuration: {property_name}"),
            kind: DiagnosticKind::UnexpectedProperty,
        }
    }
}

impl fmt::Display for ConfigurationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_name, self.message)
    }
}

/// Render a value for a diagnostic message.
///
/// Strings are shown bare and numbers, booleans and `null` in their usual
/// form. Arrays and objects are rendered as compact JSON (`[2]`,
/// `{"size":2}`) rather than flattened or collapsed to a type name, so the
/// offending value stays readable in the message.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A resolved configuration paired with everything that was wrong with its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveConfigurationResult {
    pub config: ResolvedConfiguration,
    pub diagnostics: Vec<ConfigurationDiagnostic>,
}

impl ResolveConfigurationResult {
    /// `true` when the input had no invalid or unrecognized properties.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics reported for one property, in report order.
    pub fn diagnostics_for<'a>(
        &'a self,
        property_name: &'a str,
    ) -> impl Iterator<Item = &'a ConfigurationDiagnostic> + 'a {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.property_name == property_name)
    }

    /// Treat any diagnostic as fatal.
    ///
    /// For callers whose policy is to refuse imperfect configuration.
    pub fn into_result(self) -> Result<ResolvedConfiguration> {
        if self.diagnostics.is_empty() {
            return Ok(self.config);
        }

        let summary = self
            .diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        Err(Error::InvalidConfiguration {
            count: self.diagnostics.len(),
            summary,
        })
    }
}
