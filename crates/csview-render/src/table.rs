//! Table renderer: model + border glyphs + layout settings in, text out.
//!
//! # Example
//!
//! ```rust
//! use csview_render::{ingest, Align, BorderStyle, IngestOptions, RenderConfig, Table};
//!
//! let model = ingest("name,age\nAlice,30\nBob,7".as_bytes(), &IngestOptions::default()).unwrap();
//! let config = RenderConfig::default().header_align(Align::Left);
//! let table = Table::new(&model, BorderStyle::Ascii, config);
//!
//! assert_eq!(
//!     table.render(),
//!     "+-------+-----+\n\
//!      | name  | age |\n\
//!      +-------+-----+\n\
//!      | Alice | 30  |\n\
//!      | Bob   | 7   |\n\
//!      +-------+-----+\n"
//! );
//! ```

use std::convert::Infallible;
use std::io::{self, Write};

use crate::model::{Record, TabularModel};
use crate::style::{BorderChars, BorderStyle, RowSeparator};
use crate::types::{Align, RenderConfig};
use crate::width::{cell_lines, display_width, truncate_to_width};

/// A table ready to be written out.
#[derive(Clone, Debug)]
pub struct Table<'a> {
    model: &'a TabularModel,
    chars: BorderChars,
    config: RenderConfig,
    /// Column widths including the row-number column when enabled.
    widths: Vec<usize>,
}

impl<'a> Table<'a> {
    /// Create a table for `model` drawn in `style`.
    pub fn new(model: &'a TabularModel, style: BorderStyle, config: RenderConfig) -> Self {
        tracing::debug!(%style, "rendering table");
        Self::with_chars(model, style.chars(), config)
    }

    /// Create a table from an explicit glyph table.
    pub fn with_chars(model: &'a TabularModel, chars: BorderChars, config: RenderConfig) -> Self {
        let mut widths = Vec::with_capacity(model.max_columns() + 1);
        if config.number_rows {
            widths.push(model.number_width());
        }
        widths.extend_from_slice(model.column_widths());
        tracing::debug!(columns = widths.len(), rows = model.row_count(), ?widths, "column layout");

        Table {
            model,
            chars,
            config,
            widths,
        }
    }

    /// Display widths of the rendered columns, row numbers first if enabled.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn num_columns(&self) -> usize {
        self.widths.len()
    }

    /// Top border line, if the style draws one.
    pub fn top_border(&self) -> Option<String> {
        self.chars.top.as_ref().map(|sep| self.separator_line(sep))
    }

    /// Rule under the header, if the style draws one.
    pub fn header_separator(&self) -> Option<String> {
        self.chars.header.as_ref().map(|sep| self.separator_line(sep))
    }

    /// Rule between body rows, if the style draws one.
    pub fn row_separator(&self) -> Option<String> {
        self.chars.middle.as_ref().map(|sep| self.separator_line(sep))
    }

    /// Bottom border line, if the style draws one.
    pub fn bottom_border(&self) -> Option<String> {
        self.chars.bottom.as_ref().map(|sep| self.separator_line(sep))
    }

    /// The formatted header, or `None` when the input had none.
    ///
    /// Multi-line cells produce several lines joined by `\n`.
    pub fn header_row(&self) -> Option<String> {
        self.model
            .header()
            .map(|header| self.format_record(header, "#", self.config.header_align))
    }

    /// The formatted body row at `index` (0-based).
    pub fn row(&self, index: usize) -> Option<String> {
        self.model.rows().get(index).map(|record| {
            let number = (index + 1).to_string();
            self.format_record(record, &number, self.config.body_align)
        })
    }

    /// Writes the whole table to `out`, one line at a time.
    pub fn render_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.for_each_line(|line| writeln!(out, "{}", line))
    }

    /// Renders the whole table into a string ending in a newline.
    pub fn render(&self) -> String {
        let mut output = String::new();
        let result = self.for_each_line(|line| -> Result<(), Infallible> {
            output.push_str(line);
            output.push('\n');
            Ok(())
        });
        match result {
            Ok(()) => output,
            Err(never) => match never {},
        }
    }

    fn for_each_line<E, F>(&self, mut emit: F) -> Result<(), E>
    where
        F: FnMut(&str) -> Result<(), E>,
    {
        if let Some(top) = self.top_border() {
            emit(&top)?;
        }

        let rows = self.model.rows();
        if let Some(header) = self.header_row() {
            emit(&header)?;
            if !rows.is_empty() {
                if let Some(sep) = self.header_separator() {
                    emit(&sep)?;
                }
            }
        }

        let separator = self.row_separator();
        for index in 0..rows.len() {
            if let Some(row) = self.row(index) {
                emit(&row)?;
            }
            if index + 1 < rows.len() {
                if let Some(sep) = &separator {
                    emit(sep)?;
                }
            }
        }

        if let Some(bottom) = self.bottom_border() {
            emit(&bottom)?;
        }
        Ok(())
    }

    /// Formats one record as one or more row lines.
    fn format_record(&self, record: &Record, number: &str, align: Align) -> String {
        let cells: Vec<Vec<&str>> = (0..self.widths.len())
            .map(|column| cell_lines(self.cell(record, column, number)))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        let mut out = String::new();
        for line in 0..height {
            if line > 0 {
                out.push('\n');
            }
            let texts: Vec<&str> = cells
                .iter()
                .map(|lines| lines.get(line).copied().unwrap_or(""))
                .collect();
            self.push_row_line(&mut out, &texts, align);
        }
        out
    }

    fn cell<'r>(&self, record: &'r Record, column: usize, number: &'r str) -> &'r str {
        if !self.config.number_rows {
            return record.get(column);
        }
        match column {
            0 => number,
            _ => record.get(column - 1),
        }
    }

    fn push_row_line(&self, out: &mut String, texts: &[&str], align: Align) {
        push_spaces(out, self.config.indent);
        if let Some(left) = self.chars.left {
            out.push_str(left);
        }

        let last = self.widths.len().saturating_sub(1);
        for (i, (&width, text)) in self.widths.iter().zip(texts).enumerate() {
            push_spaces(out, self.config.padding);
            out.push_str(&pad_cell(text, width, align, true));
            push_spaces(out, self.config.padding);
            if i < last {
                if let Some(mid) = self.chars.mid {
                    out.push_str(mid);
                }
            }
        }

        if let Some(right) = self.chars.right {
            out.push_str(right);
        }
    }

    fn separator_line(&self, sep: &RowSeparator) -> String {
        let mut out = String::new();
        push_spaces(&mut out, self.config.indent);
        if self.chars.left.is_some() {
            out.push_str(sep.left);
        }

        let last = self.widths.len().saturating_sub(1);
        for (i, &width) in self.widths.iter().enumerate() {
            out.push_str(&sep.fill.repeat(width + 2 * self.config.padding));
            if i < last && self.chars.mid.is_some() {
                out.push_str(sep.cross);
            }
        }

        if self.chars.right.is_some() {
            out.push_str(sep.right);
        }
        out
    }
}

/// Renders `model` in `style` to a string.
pub fn render(model: &TabularModel, style: BorderStyle, config: &RenderConfig) -> String {
    Table::new(model, style, *config).render()
}

/// Fits one line of cell text into `width` display columns.
///
/// Narrower text is padded per `align`. Wider text is cut at a character
/// boundary when `truncate` is set (then space-filled if a wide character
/// left a gap), or returned unchanged otherwise.
///
/// ```rust
/// use csview_render::{pad_cell, Align};
///
/// assert_eq!(pad_cell("ab", 5, Align::Left, true), "ab   ");
/// assert_eq!(pad_cell("ab", 5, Align::Center, true), " ab  ");
/// assert_eq!(pad_cell("ab", 5, Align::Right, true), "   ab");
/// assert_eq!(pad_cell("abcdef", 3, Align::Left, true), "abc");
/// ```
pub fn pad_cell(content: &str, width: usize, align: Align, truncate: bool) -> String {
    let content_width = display_width(content);
    if truncate && content_width > width {
        return pad_cell(truncate_to_width(content, width), width, align, false);
    }
    if content_width >= width {
        return content.to_string();
    }

    let (left, right) = align.split(width - content_width);
    let mut out = String::with_capacity(content.len() + left + right);
    push_spaces(&mut out, left);
    out.push_str(content);
    push_spaces(&mut out, right);
    out
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
