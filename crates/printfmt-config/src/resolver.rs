//! Resolution of a raw configuration into a resolved one.
//!
//! Known properties are resolved in a fixed order (`lineWidth`,
//! `indentWidth`, `useTabs`, `newlineKind`). Each one is marked consumed as it
//! is read; whatever is left over afterwards, minus the reserved
//! `projectType`/`plugins`, is reported as an unexpected property.

use std::collections::HashSet;

use serde_json::{Number, Value};

use crate::constants::ConfigProperty;
use crate::diagnostic::{ConfigurationDiagnostic, ResolveConfigurationResult};
use crate::newline::{HostNewline, NewlineKind, parse_newline_kind};
use crate::raw::RawConfiguration;
use crate::resolved::ResolvedConfiguration;

/// Resolve with the running host's newline convention.
///
/// Shorthand for `ConfigurationResolver::new().resolve(input)`.
pub fn resolve_configuration(input: &RawConfiguration) -> ResolveConfigurationResult {
    ConfigurationResolver::new().resolve(input)
}

/// Resolves partial configurations into complete ones.
///
/// Resolution never fails: invalid values fall back to their defaults and
/// are reported as diagnostics next to the resolved configuration. The input
/// is only borrowed and never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigurationResolver {
    /// What `newlineKind = "system"` resolves to.
    host_newline: HostNewline,
}

impl ConfigurationResolver {
    /// Create a resolver for the running host.
    pub fn new() -> Self {
        Self {
            host_newline: HostNewline::native(),
        }
    }

    /// Create a resolver with a fixed host newline convention.
    ///
    /// Useful for tests and for tools formatting on behalf of another platform.
    pub fn with_host_newline(host_newline: HostNewline) -> Self {
        Self { host_newline }
    }

    pub fn host_newline(&self) -> HostNewline {
        self.host_newline
    }

    /// Resolve `input`, filling in defaults and collecting diagnostics.
    pub fn resolve(&self, input: &RawConfiguration) -> ResolveConfigurationResult {
        tracing::debug!(properties = input.len(), "Resolving configuration");

        let mut resolution = Resolution::new(input, self.host_newline);

        let config = ResolvedConfiguration {
            line_width: resolution.number(
                ConfigProperty::LineWidth,
                ResolvedConfiguration::DEFAULT_LINE_WIDTH,
            ),
            indent_width: resolution.number(
                ConfigProperty::IndentWidth,
                ResolvedConfiguration::DEFAULT_INDENT_WIDTH,
            ),
            use_tabs: resolution.boolean(
                ConfigProperty::UseTabs,
                ResolvedConfiguration::DEFAULT_USE_TABS,
            ),
            newline_kind: resolution.newline_kind(),
        };

        resolution.report_excess_properties();

        tracing::debug!(
            diagnostics = resolution.diagnostics.len(),
            "Configuration resolved"
        );

        ResolveConfigurationResult {
            config,
            diagnostics: resolution.diagnostics,
        }
    }
}

impl Default for ConfigurationResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// State of a single `resolve` call.
struct Resolution<'a> {
    input: &'a RawConfiguration,
    consumed: HashSet<&'static str>,
    host_newline: HostNewline,
    diagnostics: Vec<ConfigurationDiagnostic>,
}

impl<'a> Resolution<'a> {
    fn new(input: &'a RawConfiguration, host_newline: HostNewline) -> Self {
        Self {
            input,
            consumed: HashSet::new(),
            host_newline,
            diagnostics: Vec::new(),
        }
    }

    /// Read a known property and mark it consumed. `null` counts as absent.
    fn take(&mut self, property: ConfigProperty) -> Option<&'a Value> {
        let input = self.input;
        let name = property.as_str();
        self.consumed.insert(name);
        let value = input.get(name).filter(|value| !value.is_null());
        tracing::trace!(property = name, present = value.is_some(), "Consumed property");
        value
    }

    fn push(&mut self, diagnostic: ConfigurationDiagnostic) {
        tracing::debug!(
            property = %diagnostic.property_name,
            message = %diagnostic.message,
            "Configuration diagnostic"
        );
        self.diagnostics.push(diagnostic);
    }

    /// Any JSON number is valid and kept exactly as written.
    fn number(&mut self, property: ConfigProperty, default: u64) -> Number {
        let Some(value) = self.take(property) else {
            return Number::from(default);
        };

        match value {
            Value::Number(number) => number.clone(),
            _ => {
                self.push(ConfigurationDiagnostic::invalid_type(
                    property.as_str(),
                    "number",
                    value,
                ));
                Number::from(default)
            }
        }
    }

    fn boolean(&mut self, property: ConfigProperty, default: bool) -> bool {
        let Some(value) = self.take(property) else {
            return default;
        };

        match value {
            Value::Bool(flag) => *flag,
            other => {
                self.push(ConfigurationDiagnostic::invalid_type(
                    property.as_str(),
                    "boolean",
                    other,
                ));
                default
            }
        }
    }

    fn newline_kind(&mut self) -> NewlineKind {
        let property = ConfigProperty::NewlineKind;
        let Some(value) = self.take(property) else {
            return ResolvedConfiguration::DEFAULT_NEWLINE_KIND;
        };

        let parsed = value
            .as_str()
            .and_then(|spelling| parse_newline_kind(spelling, self.host_newline));

        match parsed {
            Some(kind) => kind,
            None => {
                self.push(ConfigurationDiagnostic::unknown_value(property.as_str(), value));
                ResolvedConfiguration::DEFAULT_NEWLINE_KIND
            }
        }
    }

    /// Report every property that was neither consumed nor reserved, in input order.
    fn report_excess_properties(&mut self) {
        let input = self.input;
        for (name, _) in input.iter() {
            if self.consumed.contains(name) {
                continue;
            }
            if ConfigProperty::from_name(name).is_some_and(|property| property.is_reserved()) {
                continue;
            }
            self.push(ConfigurationDiagnostic::unexpected_property(name));
        }
    }
}
