//! Newline kinds and the host's native line ending.

use std::fmt;

use serde::{Serialize, Serializer};

/// Line ending policy used by text-producing code.
///
/// Serializes to its concrete value (`"auto"`, `"\r\n"` or `"\n"`), never to
/// the input spellings `crlf`, `lf` or `system`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NewlineKind {
    /// Use whatever line ending the input already uses.
    #[default]
    Auto,
    /// `\r\n`
    CarriageReturnLineFeed,
    /// `\n`
    LineFeed,
}

impl NewlineKind {
    /// The concrete resolved value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::CarriageReturnLineFeed => "\r\n",
            Self::LineFeed => "\n",
        }
    }

    /// The spelling a user writes in a configuration to select this kind.
    pub fn input_spelling(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::CarriageReturnLineFeed => "crlf",
            Self::LineFeed => "lf",
        }
    }
}

impl fmt::Display for NewlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NewlineKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Line ending convention of the host the formatter runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostNewline {
    Crlf,
    Lf,
}

impl HostNewline {
    /// Convention of the running host: CRLF on Windows, LF everywhere else.
    pub fn native() -> Self {
        if cfg!(windows) { Self::Crlf } else { Self::Lf }
    }

    /// The concrete newline kind `system` resolves to on this host.
    pub fn to_newline_kind(self) -> NewlineKind {
        match self {
            Self::Crlf => NewlineKind::CarriageReturnLineFeed,
            Self::Lf => NewlineKind::LineFeed,
        }
    }
}

/// Map an input spelling to a newline kind.
///
/// Returns `None` for anything that is not one of `auto`, `crlf`, `lf` or
/// `system`. Absence is handled by the caller.
pub fn parse_newline_kind(value: &str, host: HostNewline) -> Option<NewlineKind> {
    match value {
        "auto" => Some(NewlineKind::Auto),
        "crlf" => Some(NewlineKind::CarriageReturnLineFeed),
        "lf" => Some(NewlineKind::LineFeed),
        "system" => Some(host.to_newline_kind()),
        _ => None,
    }
}
