//! # csview-render - CSV to terminal tables
//!
//! `csview-render` reads delimited text into a [`TabularModel`] and draws it
//! as a bordered table whose columns line up even when cells mix ASCII,
//! CJK, emoji and combining marks. Every width in this crate is a display
//! width in terminal columns.
//!
//! ## Core Concepts
//!
//! - [`ingest`]: stream CSV/TSV into a [`TabularModel`], measuring columns
//!   as records arrive (bounded by a sniff limit)
//! - [`BorderStyle`]: the eight named looks, each mapping to a [`BorderChars`] table
//! - [`Table`]: lays out a model with a style and a [`RenderConfig`]
//! - [`display_width`]: the width metric used everywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use csview_render::{ingest, BorderStyle, IngestOptions, RenderConfig, Table};
//!
//! let input = "city,pop\n東京,14M\nLima,10M\n";
//! let model = ingest(input.as_bytes(), &IngestOptions::default()).unwrap();
//!
//! let table = Table::new(&model, BorderStyle::Sharp, RenderConfig::default());
//! let output = table.render();
//!
//! assert!(output.starts_with("┌──────┬─────┐\n"));
//! assert!(output.contains("│ 東京 │ 14M │"));
//! ```

pub mod error;
pub mod ingest;
pub mod model;
pub mod style;
pub mod table;
pub mod types;
pub mod width;

pub use error::IngestError;
pub use ingest::{ingest, IngestOptions, ModelBuilder, CHUNK_SIZE, DEFAULT_SNIFF_LIMIT};
pub use model::{Record, TabularModel};
pub use style::{resolve, BorderChars, BorderStyle, RowSeparator};
pub use table::{pad_cell, render, Table};
pub use types::{Align, RenderConfig};
pub use width::{cell_lines, display_width, display_width_bytes, truncate_to_width};
