//! Inventory Record
//!
//! The data unit of the store: one stock-keeping line item with a derived
//! low-stock predicate and two serializations (durable line format for the
//! backing file, display format for humans).

use serde::{Deserialize, Serialize};

/// Quantity below which a record counts as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Field separator in the durable line format.
///
/// Names containing this character serialize into unparseable lines; the
/// format does not quote or escape, so the limitation is documented rather
/// than fixed.
pub const FIELD_SEPARATOR: char = ',';

/// One inventory line item.
///
/// Ids are caller-assigned (positive by convention) and unique within a
/// store; quantity and price are expected non-negative but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Record {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Whether this record is below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }

    /// Serialize to one line of the backing-file format:
    /// `id,name,quantity,price`. Price uses its minimal decimal rendering;
    /// storage precision is whatever the value needs, display precision is
    /// fixed separately by [`Record::display_line`].
    pub fn to_line(&self) -> String {
        format!(
            "{id}{sep}{name}{sep}{qty}{sep}{price}",
            id = self.id,
            name = self.name,
            qty = self.quantity,
            price = self.price,
            sep = FIELD_SEPARATOR,
        )
    }

    /// Parse one line of the backing-file format.
    ///
    /// Returns `None` when the line does not split into exactly four fields
    /// or any numeric field fails to parse. Callers skip such lines; a bad
    /// line never aborts a load.
    pub fn parse_line(line: &str) -> Option<Record> {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() != 4 {
            return None;
        }
        let id = parts[0].parse::<i64>().ok()?;
        let quantity = parts[2].parse::<i64>().ok()?;
        let price = parts[3].parse::<f64>().ok()?;
        Some(Record {
            id,
            name: parts[1].to_string(),
            quantity,
            price,
        })
    }

    /// Human-readable one-line rendering with a low-stock marker.
    /// Price is always shown with two fractional digits.
    pub fn display_line(&self) -> String {
        let marker = if self.is_low_stock() { " - LOW STOCK!" } else { "" };
        format!(
            "ID: {} | Name: {} | Quantity: {} | Price: {:.2}{}",
            self.id, self.name, self.quantity, self.price, marker
        )
    }
}
