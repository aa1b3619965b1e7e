//! Render configuration types.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides, extra space on the right).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl Align {
    pub fn name(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }

    /// Parses an alignment name, ignoring case. Unknown names give [`Align::Left`].
    pub fn from_name(name: &str) -> Self {
        [Align::Left, Align::Center, Align::Right]
            .into_iter()
            .find(|align| align.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Splits `pad` spaces into (left, right) for this alignment.
    pub fn split(&self, pad: usize) -> (usize, usize) {
        match self {
            Align::Left => (0, pad),
            Align::Center => (pad / 2, pad - pad / 2),
            Align::Right => (pad, 0),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Align {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Align::from_name(s))
    }
}

/// Layout settings for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces on each side of every cell.
    pub padding: usize,
    /// Spaces before every output line.
    pub indent: usize,
    pub header_align: Align,
    pub body_align: Align,
    /// Prepend a `#` column numbering body rows from 1.
    pub number_rows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            padding: 1,
            indent: 0,
            header_align: Align::Center,
            body_align: Align::Left,
            number_rows: false,
        }
    }
}

impl RenderConfig {
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    pub fn body_align(mut self, align: Align) -> Self {
        self.body_align = align;
        self
    }

    pub fn number_rows(mut self, enable: bool) -> Self {
        self.number_rows = enable;
        self
    }
}
