//! Border styles and the glyphs each one draws with.
//!
//! A [`BorderStyle`] names a look; [`BorderStyle::chars`] maps it to a fixed
//! [`BorderChars`] table. A glyph or separator set to `None` is left out of
//! the output entirely, which is different from drawing it as blank.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No borders, columns separated by padding only.
    None,
    /// ASCII borders: +, -, |
    Ascii,
    /// ASCII with only a header rule and inner column bars.
    Ascii2,
    /// Light box-drawing characters with square corners.
    #[default]
    Sharp,
    /// Light box-drawing characters with rounded corners: ╭, ╮, ╰, ╯
    Rounded,
    /// Light lines with heavy corners: ┏, ┓, ┗, ┛
    Reinforced,
    /// GitHub-flavored markdown table.
    Markdown,
    /// Like `Sharp`, with a rule between every pair of body rows.
    Grid,
}

impl BorderStyle {
    /// Every style, in the order they are listed in help output.
    pub const ALL: [BorderStyle; 8] = [
        BorderStyle::None,
        BorderStyle::Ascii,
        BorderStyle::Ascii2,
        BorderStyle::Sharp,
        BorderStyle::Rounded,
        BorderStyle::Reinforced,
        BorderStyle::Markdown,
        BorderStyle::Grid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Ascii => "ascii",
            BorderStyle::Ascii2 => "ascii2",
            BorderStyle::Sharp => "sharp",
            BorderStyle::Rounded => "rounded",
            BorderStyle::Reinforced => "reinforced",
            BorderStyle::Markdown => "markdown",
            BorderStyle::Grid => "grid",
        }
    }

    /// Looks a style up by name, ignoring case. Unknown names give [`BorderStyle::Sharp`].
    ///
    /// ```rust
    /// use csview_render::BorderStyle;
    ///
    /// assert_eq!(BorderStyle::from_name("Rounded"), BorderStyle::Rounded);
    /// assert_eq!(BorderStyle::from_name("fancy"), BorderStyle::Sharp);
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Get the glyph table for this border style.
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::None => BorderChars {
                left: None,
                mid: None,
                right: None,
                top: None,
                header: None,
                middle: None,
                bottom: None,
            },
            BorderStyle::Ascii => BorderChars {
                left: Some("|"),
                mid: Some("|"),
                right: Some("|"),
                top: Some(RowSeparator::new("-", "+", "+", "+")),
                header: Some(RowSeparator::new("-", "+", "+", "+")),
                middle: None,
                bottom: Some(RowSeparator::new("-", "+", "+", "+")),
            },
            BorderStyle::Ascii2 => BorderChars {
                left: Some(" "),
                mid: Some("|"),
                right: Some(" "),
                top: None,
                header: Some(RowSeparator::new("-", " ", "+", " ")),
                middle: None,
                bottom: None,
            },
            BorderStyle::Sharp => BorderChars {
                top: Some(RowSeparator::new("─", "┌", "┬", "┐")),
                bottom: Some(RowSeparator::new("─", "└", "┴", "┘")),
                ..BorderChars::light()
            },
            BorderStyle::Rounded => BorderChars {
                top: Some(RowSeparator::new("─", "╭", "┬", "╮")),
                bottom: Some(RowSeparator::new("─", "╰", "┴", "╯")),
                ..BorderChars::light()
            },
            BorderStyle::Reinforced => BorderChars {
                top: Some(RowSeparator::new("─", "┏", "┬", "┓")),
                bottom: Some(RowSeparator::new("─", "┗", "┴", "┛")),
                ..BorderChars::light()
            },
            BorderStyle::Markdown => BorderChars {
                left: Some("|"),
                mid: Some("|"),
                right: Some("|"),
                top: None,
                header: Some(RowSeparator::new("-", "|", "|", "|")),
                middle: None,
                bottom: None,
            },
            BorderStyle::Grid => BorderChars {
                top: Some(RowSeparator::new("─", "┌", "┬", "┐")),
                middle: Some(RowSeparator::new("─", "├", "┼", "┤")),
                bottom: Some(RowSeparator::new("─", "└", "┴", "┘")),
                ..BorderChars::light()
            },
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BorderStyle::from_name(s))
    }
}

/// Glyphs for one horizontal rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSeparator {
    /// Repeated across each column's span.
    pub fill: &'static str,
    /// Drawn under/over the left border.
    pub left: &'static str,
    /// Drawn where the rule meets an inner column separator.
    pub cross: &'static str,
    /// Drawn under/over the right border.
    pub right: &'static str,
}

impl RowSeparator {
    pub const fn new(
        fill: &'static str,
        left: &'static str,
        cross: &'static str,
        right: &'static str,
    ) -> Self {
        RowSeparator {
            fill,
            left,
            cross,
            right,
        }
    }
}

/// Box-drawing glyphs for a border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    /// Left border of each row.
    pub left: Option<&'static str>,
    /// Separator between columns.
    pub mid: Option<&'static str>,
    /// Right border of each row.
    pub right: Option<&'static str>,
    /// Rule above the table.
    pub top: Option<RowSeparator>,
    /// Rule between the header and the body.
    pub header: Option<RowSeparator>,
    /// Rule between consecutive body rows.
    pub middle: Option<RowSeparator>,
    /// Rule below the table.
    pub bottom: Option<RowSeparator>,
}

impl BorderChars {
    /// Light vertical lines and a light header rule, shared by the box styles.
    fn light() -> Self {
        BorderChars {
            left: Some("│"),
            mid: Some("│"),
            right: Some("│"),
            top: None,
            header: Some(RowSeparator::new("─", "├", "┼", "┤")),
            middle: None,
            bottom: None,
        }
    }
}

/// Resolves a style name straight to its glyph table.
pub fn resolve(name: &str) -> BorderChars {
    BorderStyle::from_name(name).chars()
}
