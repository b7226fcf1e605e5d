use std::borrow::Cow;
use std::collections::HashMap;

use chrono::NaiveDateTime;
use csv::ByteRecord;
use rust_decimal::Decimal;

use crate::models::Record;
use crate::parser::fields::{parse_invoice_date, parse_or_zero, parse_unit_price};
use crate::parser::{FieldError, ParseError};
use crate::types::{CustomerId, Quantity};

/// Writes one cell's value into the matching field of a `RecordBuilder`.
pub type FieldSetter = fn(&mut RecordBuilder, &str) -> Result<(), FieldError>;

/// Lookup table from header name to the setter that fills that field.
///
/// Order here is the order setters run in, not the order columns appear in the file.
const FIELD_SETTERS: [(&str, FieldSetter); 8] = [
    ("InvoiceNo", RecordBuilder::set_invoice_no),
    ("StockCode", RecordBuilder::set_stock_code),
    ("Description", RecordBuilder::set_description),
    ("Quantity", RecordBuilder::set_quantity),
    ("InvoiceDate", RecordBuilder::set_invoice_date),
    ("UnitPrice", RecordBuilder::set_unit_price),
    ("CustomerID", RecordBuilder::set_customer_id),
    ("Country", RecordBuilder::set_country)
];

/// A record under construction, filled one column at a time.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    invoice_no: Option<String>,
    stock_code: Option<String>,
    description: Option<String>,
    quantity: Option<Quantity>,
    invoice_date: Option<NaiveDateTime>,
    unit_price: Option<Decimal>,
    customer_id: Option<CustomerId>,
    country: Option<String>
}

impl RecordBuilder {
    fn set_invoice_no(&mut self, value: &str) -> Result<(), FieldError> {
        self.invoice_no = Some(value.to_string());
        Ok(())
    }

    fn set_stock_code(&mut self, value: &str) -> Result<(), FieldError> {
        self.stock_code = Some(value.to_string());
        Ok(())
    }

    fn set_description(&mut self, value: &str) -> Result<(), FieldError> {
        self.description = Some(value.to_string());
        Ok(())
    }

    fn set_quantity(&mut self, value: &str) -> Result<(), FieldError> {
        self.quantity = Some(parse_or_zero(value));
        Ok(())
    }

    fn set_invoice_date(&mut self, value: &str) -> Result<(), FieldError> {
        self.invoice_date = Some(parse_invoice_date(value)?);
        Ok(())
    }

    fn set_unit_price(&mut self, value: &str) -> Result<(), FieldError> {
        self.unit_price = Some(parse_unit_price(value)?);
        Ok(())
    }

    fn set_customer_id(&mut self, value: &str) -> Result<(), FieldError> {
        self.customer_id = Some(parse_or_zero(value));
        Ok(())
    }

    fn set_country(&mut self, value: &str) -> Result<(), FieldError> {
        self.country = Some(value.to_string());
        Ok(())
    }

    /// Finishes the record, or names the first column that was never set.
    fn build(self) -> Result<Record, &'static str> {
        Ok(Record {
            invoice_no: self.invoice_no.ok_or("InvoiceNo")?,
            stock_code: self.stock_code.ok_or("StockCode")?,
            description: self.description.ok_or("Description")?,
            quantity: self.quantity.ok_or("Quantity")?,
            invoice_date: self.invoice_date.ok_or("InvoiceDate")?,
            unit_price: self.unit_price.ok_or("UnitPrice")?,
            customer_id: self.customer_id.ok_or("CustomerID")?,
            country: self.country.ok_or("Country")?
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnBinding {
    column: &'static str,
    index: usize,
    setter: FieldSetter
}

/// Binds every record field to the position of its column in the header.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    bindings: Vec<ColumnBinding>
}

impl ColumnMap {
    /// Resolves each required column by name. Extra columns are ignored and,
    /// when a name repeats, the first occurrence wins. Header cells are decoded lossily.
    ///
    /// # Errors
    /// Returns `ParseError::MissingColumn` for the first required column the header lacks.
    pub fn from_headers(headers: &ByteRecord) -> Result<Self, ParseError> {
        let names: Vec<Cow<'_, str>> = headers.iter().map(String::from_utf8_lossy).collect();
        let mut name_to_index = HashMap::new();

        for (index, name) in names.iter().enumerate() {
            let name = name.trim_start_matches('\u{feff}').trim();
            name_to_index.entry(name).or_insert(index);
        }

        let bindings = FIELD_SETTERS.iter()
            .map(|&(column, setter)| {
                name_to_index.get(column)
                    .map(|&index| ColumnBinding { column, index, setter })
                    .ok_or(ParseError::MissingColumn { column })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bindings })
    }

    /// Converts one data row into a `Record`.
    ///
    /// Cells are decoded lossily, with U+FFFD standing in for invalid UTF-8.
    /// `line` is the row's line number in the file and only feeds error messages.
    pub fn apply(&self, row: &ByteRecord, line: u64) -> Result<Record, ParseError> {
        let mut builder = RecordBuilder::default();

        for binding in &self.bindings {
            let bytes = row.get(binding.index)
                .ok_or_else(|| ParseError::missing_field(line, binding.column))?;
            let value = String::from_utf8_lossy(bytes);

            (binding.setter)(&mut builder, &value)
                .map_err(|error| ParseError::invalid_field(line, binding.column, &value, error))?;
        }

        builder.build().map_err(|column| ParseError::missing_field(line, column))
    }
}
