//! The `csview` command: read CSV/TSV, print it as a table, page if interactive.
//!
//! The binary is a thin shell over [`run`]; everything that decides what the
//! output looks like lives in `csview-render`.

pub mod cli;
pub mod logging;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use csview_pipe::Pager;
use csview_render::{ingest, TabularModel, Table};

pub use cli::Cli;

/// Parse the configured input, then render it to stdout or a pager.
pub fn run(cli: &Cli) -> Result<()> {
    let model = read_model(cli)?;
    let table = Table::new(&model, cli.style, cli.render_config());

    if should_page(cli) {
        page(&table, &Pager::from_env())?;
    } else {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        ignore_broken_pipe(table.render_to(&mut out).and_then(|_| out.flush()))
            .context("failed to write to stdout")?;
    }
    Ok(())
}

/// Render into any writer, with the same ingestion and layout as [`run`] but no pager.
pub fn run_with<R: Read, W: Write + ?Sized>(cli: &Cli, input: R, out: &mut W) -> Result<()> {
    let model = ingest(input, &cli.ingest_options())?;
    Table::new(&model, cli.style, cli.render_config()).render_to(out)?;
    Ok(())
}

fn page(table: &Table<'_>, pager: &Pager) -> Result<()> {
    let mut process = pager.spawn()?;
    let written = {
        let mut out = BufWriter::new(&mut process);
        ignore_broken_pipe(table.render_to(&mut out).and_then(|_| out.flush()))
    };
    process.finish()?;
    written.context("failed to write to pager")
}

fn read_model(cli: &Cli) -> Result<TabularModel> {
    let options = cli.ingest_options();
    let model = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            ingest(file, &options)?
        }
        None => ingest(io::stdin().lock(), &options)?,
    };
    Ok(model)
}

fn should_page(cli: &Cli) -> bool {
    !cli.disable_pager && console::Term::stdout().is_term()
}

/// A reader that went away (`| head`, quitting the pager) is not an error.
fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
