mod printer;

pub use printer::{ReportPrinter, DEFAULT_WINDOW};
