//! Streaming CSV ingestion into a [`TabularModel`].
//!
//! The `csv` tokenizer is driven record by record and its output is handed
//! to a [`ModelBuilder`] as field and record notifications. Column widths
//! are folded in as records complete; the sniff limit bounds how many body
//! rows take part in width discovery, never how many are kept.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Record, TabularModel};
use crate::width::display_width_bytes;

/// Size of each read from the input stream.
pub const CHUNK_SIZE: usize = 8192;

/// Default number of body rows sniffed for column widths.
pub const DEFAULT_SNIFF_LIMIT: usize = 1000;

/// How input is tokenized and measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Treat the first record as a header.
    pub has_header: bool,
    /// Body rows folded into column widths; 0 sniffs every row.
    pub sniff_limit: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        IngestOptions {
            delimiter: b',',
            has_header: true,
            sniff_limit: DEFAULT_SNIFF_LIMIT,
        }
    }
}

impl IngestOptions {
    /// Options for tab-separated input.
    pub fn tsv() -> Self {
        IngestOptions {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn sniff_limit(mut self, limit: usize) -> Self {
        self.sniff_limit = limit;
        self
    }
}

/// Reads all of `reader` and builds the table model.
///
/// On error nothing is returned; the tokenizer's diagnostic is carried in
/// the [`IngestError`](crate::IngestError).
///
/// ASCII whitespace around each field is trimmed, inside quotes as well.
///
/// # Example
///
/// ```rust
/// use csview_render::{ingest, IngestOptions};
///
/// let input = "name,age\nAlice,30\nBob,7\n";
/// let model = ingest(input.as_bytes(), &IngestOptions::default()).unwrap();
///
/// assert_eq!(model.header().unwrap().get(0), "name");
/// assert_eq!(model.row_count(), 2);
/// assert_eq!(model.column_widths(), &[5, 3]);
/// ```
pub fn ingest<R: Read>(reader: R, options: &IngestOptions) -> Result<TabularModel> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(options.delimiter)
        .buffer_capacity(CHUNK_SIZE)
        .from_reader(reader);

    let mut builder = ModelBuilder::new(options);
    let mut record = csv::ByteRecord::new();
    while csv_reader.read_byte_record(&mut record)? {
        for field in record.iter() {
            builder.on_field(field);
        }
        builder.on_record()?;
    }

    Ok(builder.finish())
}

/// Assembles records from tokenizer notifications.
#[derive(Debug)]
pub struct ModelBuilder {
    model: TabularModel,
    current: Record,
    current_widths: Vec<usize>,
    expect_header: bool,
    sniff_limit: usize,
    sniffed: usize,
}

impl ModelBuilder {
    pub fn new(options: &IngestOptions) -> Self {
        ModelBuilder {
            model: TabularModel::new(),
            current: Record::default(),
            current_widths: Vec::new(),
            expect_header: options.has_header,
            sniff_limit: options.sniff_limit,
            sniffed: 0,
        }
    }

    /// A field of the current record is complete.
    pub fn on_field(&mut self, raw: &[u8]) {
        self.current_widths.push(display_width_bytes(raw));
        self.current.push(String::from_utf8_lossy(raw).into_owned());
    }

    /// The current record is complete.
    ///
    /// Records without any field are ignored.
    pub fn on_record(&mut self) -> Result<()> {
        if self.current.is_empty() {
            return Ok(());
        }
        let record = std::mem::take(&mut self.current);
        let widths = std::mem::take(&mut self.current_widths);

        if self.expect_header {
            self.expect_header = false;
            self.model.fold_widths(widths);
            self.model.set_header(record);
            return Ok(());
        }

        if self.sniff_limit == 0 || self.sniffed < self.sniff_limit {
            self.model.fold_widths(widths);
            self.sniffed += 1;
            if self.sniffed == self.sniff_limit {
                tracing::trace!(limit = self.sniff_limit, "sniff limit reached");
            }
        }

        let rows = self.model.rows_mut();
        rows.try_reserve(1)?;
        rows.push(record);
        Ok(())
    }

    /// Number of body rows that contributed to column widths.
    pub fn sniffed(&self) -> usize {
        self.sniffed
    }

    pub fn finish(self) -> TabularModel {
        tracing::debug!(
            header = self.model.header().is_some(),
            rows = self.model.row_count(),
            columns = self.model.max_columns(),
            sniffed = self.sniffed,
            "ingested table"
        );
        self.model
    }
}
