//! Error types for printfmt-config
//!
//! Resolution itself never fails; these errors come from converting foreign
//! values into a [`RawConfiguration`](crate::RawConfiguration) and from callers
//! that opt into treating diagnostics as fatal.

/// Result type for printfmt-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around configuration resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Configuration has {count} problem(s): {summary}")]
    InvalidConfiguration { count: usize, summary: String },
}

impl Error {
    /// Describe the JSON type of a value that could not be used as a configuration.
    pub(crate) fn not_an_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::NotAnObject { found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_an_object_names_the_found_type() {
        let err = Error::not_an_object(&json!([1, 2]));
        assert_eq!(
            err.to_string(),
            "Configuration must be an object, found an array"
        );
    }

    #[test]
    fn test_invalid_configuration_display() {
        let err = Error::InvalidConfiguration {
            count: 2,
            summary: "foo: bad; bar: worse".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration has 2 problem(s): foo: bad; bar: worse"
        );
    }
}
