use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};
use tracing::debug;

use crate::models::Record;
use crate::parser::column_map::ColumnMap;
use crate::parser::ParseError;

pub const DELIMITER: u8 = b',';

/// Reads retail records from a headed CSV source.
///
/// The header is read and validated up front, so a reader that was created
/// successfully is known to carry every required column.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnMap
}

impl RecordReader<BufReader<File>> {
    /// Opens the CSV file at `path` and validates its header.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| ParseError::open(path, error))?;

        debug!("Opened CSV at path: {}", path.display());

        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> RecordReader<R> {
    pub fn from_reader(source: R) -> Result<Self, ParseError> {
        //NOTE: Rows are read flexibly so a short row surfaces as a missing field for a named column
        //      instead of the generic unequal lengths error from the csv crate.
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(source);

        //NOTE: Cells are read as raw bytes and decoded lossily, so a Latin-1 export still yields records
        //      with U+FFFD in place of the bytes that are not valid UTF-8.
        let columns = ColumnMap::from_headers(reader.byte_headers()?)?;

        Ok(Self { reader, columns })
    }

    /// Lazily yields one `Record` per data row, in file order.
    pub fn records(self) -> Records<R> {
        Records {
            reader: self.reader,
            columns: self.columns,
            row: ByteRecord::new()
        }
    }
}

pub struct Records<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnMap,
    row: ByteRecord
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.row) {
            Ok(true) => {
                let line = self.row.position().map_or(0, |position| position.line());
                Some(self.columns.apply(&self.row, line))
            }
            Ok(false) => None,
            Err(error) => Some(Err(error.into()))
        }
    }
}

/// Reads every record from the CSV file at `path`.
///
/// # Errors
/// Fails on the first problem found: the file cannot be opened, the header lacks
/// a required column, or a row is short or carries an unreadable date or price.
/// Nothing is returned for the rows read before the failure.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, ParseError> {
    RecordReader::open(path)?.records().collect()
}
