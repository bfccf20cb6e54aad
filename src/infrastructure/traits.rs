//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use polars::prelude::*;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{RawColumn, RawTable};

/// Source of raw trip tables.
pub trait TripSource: Send + Sync {
    /// Read every row of a trip data file, preserving row order.
    fn read_table(&self, path: &Path) -> ApplicationResult<RawTable>;
}

/// Line-oriented interactive terminal.
pub trait Terminal {
    /// Show a prompt and read one line of input (without the line ending).
    ///
    /// End of input is an `UnexpectedEof` error.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// CSV trip source backed by polars; every column is read as text.
#[derive(Debug, Default)]
pub struct PolarsTripSource;

impl PolarsTripSource {
    fn read_frame(path: &Path) -> PolarsResult<DataFrame> {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0)) // all columns as String
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
    }

    fn to_raw_table(df: &DataFrame) -> PolarsResult<RawTable> {
        let mut columns = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let cells = column
                .str()?
                .into_iter()
                .map(|cell| cell.map(str::to_string))
                .collect();
            columns.push(RawColumn {
                name: column.name().to_string(),
                cells,
            });
        }
        Ok(RawTable::new(columns))
    }
}

impl TripSource for PolarsTripSource {
    fn read_table(&self, path: &Path) -> ApplicationResult<RawTable> {
        let unreadable = |source: io::Error| ApplicationError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        };
        match std::fs::metadata(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ApplicationError::SourceNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(unreadable(e)),
            Ok(meta) if meta.is_dir() => {
                return Err(unreadable(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "is a directory",
                )));
            }
            Ok(_) => {}
        }

        let malformed = |e: PolarsError| ApplicationError::MalformedCsv {
            path: path.to_path_buf(),
            source: Box::new(e),
        };
        let df = Self::read_frame(path).map_err(malformed)?;
        debug!("read_table: {} rows x {} columns", df.height(), df.width());
        Self::to_raw_table(&df).map_err(malformed)
    }
}

/// Real terminal on stdin/stdout. Prompts are cyan and respect NO_COLOR.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", prompt.cyan())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }
}
