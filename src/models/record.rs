use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::{CustomerId, Quantity};

/// Invariant-culture layout used when a record is rendered for the report.
pub const INVOICE_DATE_DISPLAY_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Represents a single retail line item read from the input CSV file.
///
/// Records are built once by the parser and never mutated afterwards. Text
/// fields are kept exactly as they appear in the file, while `quantity` and
/// `customer_id` fall back to zero when the file carries no usable number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(serde::Serialize), serde(rename_all = "PascalCase"))]
pub struct Record {
    /// Invoice the line item belongs to. Several records share one invoice.
    pub invoice_no: String,
    /// Product code of the item sold.
    pub stock_code: String,
    pub description: String,
    /// Units sold. Returns show up as negative quantities.
    pub quantity: Quantity,
    pub invoice_date: NaiveDateTime,
    pub unit_price: Decimal,
    #[cfg_attr(test, serde(rename = "CustomerID"))]
    pub customer_id: CustomerId,
    pub country: String
}

impl Display for Record {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "InvoiceNo: {}, StockCode: {}, Description: {}, Quantity: {}, InvoiceDate: {}, UnitPrice: {}, CustomerID: {}, Country: {}",
            self.invoice_no,
            self.stock_code,
            self.description,
            self.quantity,
            self.invoice_date.format(INVOICE_DATE_DISPLAY_FORMAT),
            self.unit_price,
            self.customer_id,
            self.country
        )
    }
}
