//! Catalog listing state and the search / filter / sort / page pipeline.
//!
//! DESIGN
//! ======
//! Filtering runs synchronously over cars already in memory. The same
//! [`Filters`] drive both the catalog grid and the wishlist page, so the
//! select values below are the only vocabulary the filter bar speaks.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Car;

/// Cars shown per listing page.
pub const PAGE_SIZE: usize = 9;

/// Price band `<select>` options as `(value, label)`.
pub const PRICE_OPTIONS: [(&str, &str); 9] = [
    ("", "All Prices"),
    ("0-10000", "$0 - $10,000"),
    ("10001-15000", "$10,001 - $15,000"),
    ("15001-20000", "$15,001 - $20,000"),
    ("20001-25000", "$20,001 - $25,000"),
    ("25001-30000", "$25,001 - $30,000"),
    ("30001-40000", "$30,001 - $40,000"),
    ("40001-50000", "$40,001 - $50,000"),
    ("50001+", "$50,001+"),
];

/// Fuel `<select>` options as `(value, label)`.
pub const FUEL_OPTIONS: [(&str, &str); 4] = [
    ("all", "All Fuel Types"),
    ("Gasoline", "Gasoline"),
    ("Diesel", "Diesel"),
    ("Electric", "Electric"),
];

/// Sort `<select>` options as `(value, label)`.
pub const SORT_OPTIONS: [(&str, &str); 3] = [
    ("", "Default"),
    ("low-high", "Price: Low to High"),
    ("high-low", "Price: High to Low"),
];

/// Inclusive price band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    Any,
    Between { min: u64, max: u64 },
    AtLeast(u64),
}

impl PriceRange {
    /// Parse a select value (`"10001-15000"`, `"50001+"`); unknown values mean `Any`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Some(min) = raw.strip_suffix('+') {
            return min.parse().map_or(Self::Any, Self::AtLeast);
        }
        let Some((min, max)) = raw.split_once('-') else {
            return Self::Any;
        };
        match (min.parse(), max.parse()) {
            (Ok(min), Ok(max)) if min <= max => Self::Between { min, max },
            _ => Self::Any,
        }
    }

    /// Select value for this band.
    pub fn value(self) -> String {
        match self {
            Self::Any => String::new(),
            Self::Between { min, max } => format!("{min}-{max}"),
            Self::AtLeast(min) => format!("{min}+"),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        match self {
            Self::Any => true,
            Self::Between { min, max } => (min..=max).contains(&price),
            Self::AtLeast(min) => price >= min,
        }
    }
}

/// Exact fuel-type filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FuelFilter {
    #[default]
    Any,
    Only(String),
}

impl FuelFilter {
    /// `""` and `"all"` mean any fuel.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "all" => Self::Any,
            other => Self::Only(other.to_owned()),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Any => "all".to_owned(),
            Self::Only(fuel) => fuel.clone(),
        }
    }

    pub fn matches(&self, fuel_type: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(fuel) => fuel == fuel_type,
        }
    }
}

/// Price ordering of results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Catalog / insertion order.
    #[default]
    Default,
    PriceLowHigh,
    PriceHighLow,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "low-high" => Self::PriceLowHigh,
            "high-low" => Self::PriceHighLow,
            _ => Self::Default,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::PriceLowHigh => "low-high",
            Self::PriceHighLow => "high-low",
        }
    }
}

/// Combined listing query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    /// Case-insensitive substring matched against make or model.
    pub query: String,
    pub price: PriceRange,
    pub fuel: FuelFilter,
    pub sort: SortOrder,
}

impl Filters {
    /// True when nothing narrows or reorders the list; hides the reset button.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, car: &Car) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search =
            car.make.to_lowercase().contains(&needle) || car.model.to_lowercase().contains(&needle);
        matches_search && self.price.contains(car.price) && self.fuel.matches(&car.fuel_type)
    }

    /// Filtered and sorted copy of `cars`. Sorting is stable.
    pub fn apply(&self, cars: &[Car]) -> Vec<Car> {
        let mut result: Vec<Car> = cars.iter().filter(|car| self.matches(car)).cloned().collect();
        match self.sort {
            SortOrder::Default => {}
            SortOrder::PriceLowHigh => result.sort_by_key(|car| car.price),
            SortOrder::PriceHighLow => result.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        result
    }
}

/// Number of pages needed for `total` results.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Cars on 1-based `page`; empty when out of range.
pub fn page_slice(cars: &[Car], page: usize) -> Vec<Car> {
    if page == 0 {
        return Vec::new();
    }
    cars.iter().skip((page - 1) * PAGE_SIZE).take(PAGE_SIZE).cloned().collect()
}

/// Catalog fetch state for the listing page.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub cars: Vec<Car>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { cars: Vec::new(), loading: true, error: None }
    }
}
