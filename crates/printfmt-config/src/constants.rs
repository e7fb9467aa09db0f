//! Recognized configuration property names.

/// A property name the resolver recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigProperty {
    /// Maximum line width (`lineWidth`)
    LineWidth,
    /// Width of one indentation level (`indentWidth`)
    IndentWidth,
    /// Indent with tabs instead of spaces (`useTabs`)
    UseTabs,
    /// Line ending policy (`newlineKind`)
    NewlineKind,
    /// Project type discriminator owned by the host tool (`projectType`)
    ProjectType,
    /// Plugin list owned by the plugin system (`plugins`)
    Plugins,
}

impl ConfigProperty {
    /// Validated properties, in the order they are resolved.
    pub const KNOWN: [ConfigProperty; 4] = [
        Self::LineWidth,
        Self::IndentWidth,
        Self::UseTabs,
        Self::NewlineKind,
    ];

    /// Properties passed through untouched for external collaborators.
    pub const RESERVED: [ConfigProperty; 2] = [Self::ProjectType, Self::Plugins];

    /// Get the property name as it appears in a configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LineWidth => "lineWidth",
            Self::IndentWidth => "indentWidth",
            Self::UseTabs => "useTabs",
            Self::NewlineKind => "newlineKind",
            Self::ProjectType => "projectType",
            Self::Plugins => "plugins",
        }
    }

    /// Look up a property by its configuration name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::KNOWN
            .into_iter()
            .chain(Self::RESERVED)
            .find(|property| property.as_str() == name)
    }

    /// Whether the property belongs to an external collaborator.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::ProjectType | Self::Plugins)
    }
}

impl AsRef<str> for ConfigProperty {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ConfigProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
