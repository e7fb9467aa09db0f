//! Fully resolved configuration.

use serde::Serialize;
use serde_json::Number;

use crate::newline::NewlineKind;

/// A configuration in which every property has a concrete, correctly typed value.
///
/// Widths keep the number exactly as written: fractional, zero, negative and
/// very large values are not rejected here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    pub line_width: Number,
    pub indent_width: Number,
    pub use_tabs: bool,
    pub newline_kind: NewlineKind,
}

impl ResolvedConfiguration {
    pub const DEFAULT_LINE_WIDTH: u64 = 120;
    pub const DEFAULT_INDENT_WIDTH: u64 = 4;
    pub const DEFAULT_USE_TABS: bool = false;
    pub const DEFAULT_NEWLINE_KIND: NewlineKind = NewlineKind::Auto;

    /// The newline sequence to emit when formatting `text`.
    ///
    /// `Auto` follows the first line ending found in `text`, falling back to
    /// `\n` when the text has none.
    pub fn newline_for(&self, text: &str) -> &'static str {
        match self.newline_kind {
            NewlineKind::CarriageReturnLineFeed => "\r\n",
            NewlineKind::LineFeed => "\n",
            NewlineKind::Auto => match text.find('\n') {
                Some(index) if text[..index].ends_with('\r') => "\r\n",
                _ => "\n",
            },
        }
    }

    /// Indent width in columns. Fractions are truncated; negative or
    /// non-finite widths count as zero.
    pub fn indent_columns(&self) -> usize {
        if let Some(columns) = self.indent_width.as_u64() {
            return usize::try_from(columns).unwrap_or(usize::MAX);
        }
        match self.indent_width.as_f64() {
            Some(width) if width.is_finite() && width > 0.0 => width.trunc() as usize,
            _ => 0,
        }
    }

    /// One level of indentation.
    pub fn indent_text(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_columns())
        }
    }
}

impl Default for ResolvedConfiguration {
    fn default() -> Self {
        Self {
            line_width: Number::from(Self::DEFAULT_LINE_WIDTH),
            indent_width: Number::from(Self::DEFAULT_INDENT_WIDTH),
            use_tabs: Self::DEFAULT_USE_TABS,
            newline_kind: Self::DEFAULT_NEWLINE_KIND,
        }
    }
}
