mod models;
mod parser;
mod report;
mod types;

use std::env::current_dir;
use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::parser::read_records;
use crate::report::{ReportPrinter, DEFAULT_WINDOW};

const DATA_DIRECTORY: &str = "Data";
const DATA_FILE: &str = "Online-Retail.csv";
const LOG_LEVEL: LevelFilter = LevelFilter::WARN;

fn main() {
    setup_logging(LOG_LEVEL);

    //NOTE: Every failure ends up here as a single line on stdout; the process still exits normally.
    if let Err(error) = run() {
        error!("Report aborted: {error:?}");
        println!("Erro ao ler o arquivo: {error}");
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn run() -> Result<()> {
    let path = current_dir()?.join(DATA_DIRECTORY).join(DATA_FILE);

    let timer = Instant::now();
    let records = read_records(&path)?;
    let duration = timer.elapsed();

    info!("Parsed {} records from [{}] in: {duration:?}", records.len(), path.display());

    let mut printer = ReportPrinter::new(BufWriter::new(stdout().lock()))
        .with_window(DEFAULT_WINDOW);

    printer.print(&records)?;

    Ok(())
}
