//! Catalog record DTOs shared by the REST client and the wishlist store.
//!
//! DESIGN
//! ======
//! Field names mirror the catalog JSON (`fuelType` is camelCase) so the same
//! type decodes API responses and the persisted wishlist payload without a
//! translation layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Catalog identifier of a car.
pub type CarId = u32;

/// A car as returned by the catalog and copied into the wishlist.
///
/// Numeric fields are unsigned integers. A negative or fractional value fails
/// decoding, and since the wishlist payload is decoded as a whole, one such
/// record makes the entire stored wishlist read as empty. Writers of the
/// `"wishlist"` slot must store whole numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique catalog key.
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: u32,
    pub color: String,
    /// Engine description (e.g. `"2.5L 4-cylinder"`).
    pub engine: String,
    /// Fuel label as published by the catalog (`"Gasoline"`, `"Diesel"`, `"Electric"`).
    pub fuel_type: String,
    pub horsepower: u32,
    /// Odometer reading in kilometers.
    pub mileage: u64,
    pub owners: u32,
    /// Asking price in whole dollars.
    pub price: u64,
    pub transmission: String,
    /// Feature labels in catalog order.
    pub features: Vec<String>,
    /// Image URI; may be empty.
    pub image: String,
}

impl Car {
    /// `"Make Model"` label used for headings and image alt text.
    pub fn title(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
