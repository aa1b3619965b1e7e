//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use csview_render::{Align, BorderStyle, IngestOptions, RenderConfig, DEFAULT_SNIFF_LIMIT};

/// A high performance csv viewer with cjk/emoji support.
#[derive(Parser, Debug, Clone)]
#[command(name = "csview")]
#[command(version)]
#[command(about = "A high performance csv viewer with cjk/emoji support.")]
pub struct Cli {
    /// File to view (reads standard input when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Specify that the input has no header row
    #[arg(short = 'H', long)]
    pub no_headers: bool,

    /// Prepend a column of line numbers to the table
    #[arg(short, long)]
    pub number: bool,

    /// Use '\t' as delimiter for tsv
    #[arg(short, long, conflicts_with = "delimiter")]
    pub tsv: bool,

    /// Specify the field delimiter
    #[arg(short, long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Specify the border style
    /// [possible values: none, ascii, ascii2, sharp, rounded, reinforced, markdown, grid]
    #[arg(short, long, value_name = "STYLE", default_value = "sharp", value_parser = parse_style)]
    pub style: BorderStyle,

    /// Specify padding for table cell
    #[arg(short, long, value_name = "NUM", default_value_t = 1)]
    pub padding: usize,

    /// Specify global indent for table
    #[arg(short, long, value_name = "NUM", default_value_t = 0)]
    pub indent: usize,

    /// Limit column widths sniffing to the specified number of rows. Specify "0" to cancel limit
    #[arg(long, value_name = "LIMIT", default_value_t = DEFAULT_SNIFF_LIMIT)]
    pub sniff: usize,

    /// Specify the alignment of the table header [possible values: left, center, right]
    #[arg(long, value_name = "ALIGN", default_value = "center", value_parser = parse_align)]
    pub header_align: Align,

    /// Specify the alignment of the table body [possible values: left, center, right]
    #[arg(long, value_name = "ALIGN", default_value = "left", value_parser = parse_align)]
    pub body_align: Align,

    /// Disable pager
    #[arg(short = 'P', long)]
    pub disable_pager: bool,
}

impl Cli {
    pub fn delimiter(&self) -> u8 {
        if self.tsv {
            b'\t'
        } else {
            self.delimiter
        }
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions::default()
            .delimiter(self.delimiter())
            .has_header(!self.no_headers)
            .sniff_limit(self.sniff)
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .padding(self.padding)
            .indent(self.indent)
            .header_align(self.header_align)
            .body_align(self.body_align)
            .number_rows(self.number)
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err("Delimiter must be a single character".to_string()),
    }
}

fn parse_style(s: &str) -> Result<BorderStyle, String> {
    Ok(BorderStyle::from_name(s))
}

fn parse_align(s: &str) -> Result<Align, String> {
    Ok(Align::from_name(s))
}
