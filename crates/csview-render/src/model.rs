//! In-memory table built by ingestion and consumed by the renderer.

use crate::width::display_width;

/// One parsed line of input: its fields in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Creates a record from its fields.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(fields: I) -> Self {
        Record {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the field at `index`, or `""` when the record is shorter.
    pub fn get(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    /// Number of fields actually present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub(crate) fn push(&mut self, field: String) {
        self.fields.push(field);
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::new(iter)
    }
}

/// Parsed rows plus the widest display width seen in each column.
///
/// `column_widths().len()` is the table's column count. Widths only ever
/// grow while rows are folded in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabularModel {
    header: Option<Record>,
    rows: Vec<Record>,
    column_widths: Vec<usize>,
}

impl TabularModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a model from in-memory records, measuring every cell.
    ///
    /// ```rust
    /// use csview_render::{Record, TabularModel};
    ///
    /// let model = TabularModel::from_records(
    ///     Some(Record::new(["name", "age"])),
    ///     vec![Record::new(["Alice", "30"]), Record::new(["Bob"])],
    /// );
    /// assert_eq!(model.column_widths(), &[5, 3]);
    /// ```
    pub fn from_records(header: Option<Record>, rows: Vec<Record>) -> Self {
        let mut model = TabularModel::new();
        if let Some(header) = header {
            model.fold_widths(header.fields().iter().map(|f| display_width(f)));
            model.header = Some(header);
        }
        for row in &rows {
            model.fold_widths(row.fields().iter().map(|f| display_width(f)));
        }
        model.rows = rows;
        model
    }

    pub fn header(&self) -> Option<&Record> {
        self.header.as_ref()
    }

    /// Body rows in input order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn max_columns(&self) -> usize {
        self.column_widths.len()
    }

    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Width of the synthetic row-number column: digits in the row count, at least 1.
    pub fn number_width(&self) -> usize {
        self.rows.len().max(1).to_string().len()
    }

    pub(crate) fn set_header(&mut self, header: Record) {
        self.header = Some(header);
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Record> {
        &mut self.rows
    }

    /// Merges one record's field widths, growing the column list as needed.
    pub(crate) fn fold_widths<I: IntoIterator<Item = usize>>(&mut self, widths: I) {
        for (i, width) in widths.into_iter().enumerate() {
            if i >= self.column_widths.len() {
                self.column_widths.resize(i + 1, 0);
            }
            if width > self.column_widths[i] {
                self.column_widths[i] = width;
            }
        }
    }
}
