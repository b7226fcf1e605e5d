use std::io;
use std::io::Write;

use crate::models::Record;

pub const DEFAULT_WINDOW: usize = 10;

/// The first `window` records, or all of them when there are fewer.
pub fn head(records: &[Record], window: usize) -> &[Record] {
    &records[..window.min(records.len())]
}

/// The last `window` records, in original order.
///
/// When there are fewer than `window` records this is the whole sequence, the
/// same slice `head` returns.
pub fn tail(records: &[Record], window: usize) -> &[Record] {
    &records[records.len().saturating_sub(window)..]
}

/// Writes the head and tail windows of a parsed dataset as labelled lines.
pub struct ReportPrinter<W: Write> {
    output: W,
    window: usize
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(output: W) -> Self {
        Self {
            output,
            window: DEFAULT_WINDOW
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn print(&mut self, records: &[Record]) -> io::Result<()> {
        writeln!(self.output, "Primeiras {} linhas:", self.window)?;
        self.print_section(head(records, self.window))?;

        writeln!(self.output)?;
        writeln!(self.output, "Últimas {} linhas:", self.window)?;
        self.print_section(tail(records, self.window))?;

        self.output.flush()
    }

    fn print_section(&mut self, records: &[Record]) -> io::Result<()> {
        for record in records {
            writeln!(self.output, "{record}")?;
        }

        Ok(())
    }
}
