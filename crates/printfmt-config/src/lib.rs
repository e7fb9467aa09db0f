//! Configuration resolution for printfmt formatters.
//!
//! Turns a partially-specified, loosely-typed configuration into a fully
//! populated [`ResolvedConfiguration`], collecting a diagnostic for every
//! invalid or unrecognized property instead of failing.
//!
//! # Example
//!
//! ```
//! use printfmt_config::{NewlineKind, RawConfiguration, resolve_configuration};
//! use serde_json::json;
//!
//! let raw = RawConfiguration::new()
//!     .with("useTabs", json!(true))
//!     .with("newlineKind", json!("lf"));
//!
//! let result = resolve_configuration(&raw);
//! assert!(result.is_clean());
//! assert!(result.config.use_tabs);
//! assert_eq!(result.config.newline_kind, NewlineKind::LineFeed);
//! ```

pub mod constants;
pub mod diagnostic;
pub mod error;
pub mod logging;
pub mod newline;
pub mod raw;
pub mod resolved;
pub mod resolver;

pub use constants::ConfigProperty;
pub use diagnostic::{ConfigurationDiagnostic, DiagnosticKind, ResolveConfigurationResult};
pub use error::{Error, Result};
pub use newline::{HostNewline, NewlineKind};
pub use raw::{Configuration, RawConfiguration};
pub use resolved::ResolvedConfiguration;
pub use resolver::{ConfigurationResolver, resolve_configuration};
