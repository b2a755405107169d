use super::*;
use crate::test_support::{car_a, car_b, car_c, make_car};

fn catalog() -> Vec<Car> {
    vec![car_a(), car_b(), car_c()]
}

fn ids(cars: &[Car]) -> Vec<u32> {
    cars.iter().map(|car| car.id).collect()
}

// =============================================================
// PriceRange
// =============================================================

#[test]
fn price_range_parses_bands() {
    assert_eq!(PriceRange::parse(""), PriceRange::Any);
    assert_eq!(PriceRange::parse("0-10000"), PriceRange::Between { min: 0, max: 10_000 });
    assert_eq!(PriceRange::parse("50001+"), PriceRange::AtLeast(50_001));
}

#[test]
fn price_range_rejects_garbage_as_any() {
    assert_eq!(PriceRange::parse("cheap"), PriceRange::Any);
    assert_eq!(PriceRange::parse("20-10"), PriceRange::Any);
    assert_eq!(PriceRange::parse("x+"), PriceRange::Any);
}

#[test]
fn price_range_bounds_are_inclusive() {
    let band = PriceRange::parse("10001-15000");
    assert!(band.contains(10_001));
    assert!(band.contains(15_000));
    assert!(!band.contains(10_000));
    assert!(!band.contains(15_001));
}

#[test]
fn price_range_open_band_has_no_ceiling() {
    let band = PriceRange::parse("50001+");
    assert!(band.contains(50_001));
    assert!(band.contains(1_000_000));
    assert!(!band.contains(50_000));
}

#[test]
fn price_options_parse_back_to_their_values() {
    for (value, _) in PRICE_OPTIONS {
        assert_eq!(PriceRange::parse(value).value(), value);
    }
}

// =============================================================
// FuelFilter / SortOrder
// =============================================================

#[test]
fn fuel_filter_all_and_empty_match_everything() {
    assert_eq!(FuelFilter::parse("all"), FuelFilter::Any);
    assert_eq!(FuelFilter::parse(""), FuelFilter::Any);
    assert!(FuelFilter::Any.matches("Diesel"));
}

#[test]
fn fuel_filter_is_exact() {
    let filter = FuelFilter::parse("Electric");
    assert!(filter.matches("Electric"));
    assert!(!filter.matches("electric"));
    assert!(!filter.matches("Gasoline"));
}

#[test]
fn sort_order_round_trips_option_values() {
    for (value, _) in SORT_OPTIONS {
        assert_eq!(SortOrder::parse(value).value(), value);
    }
    assert_eq!(SortOrder::parse("bogus"), SortOrder::Default);
}

// =============================================================
// Filters
// =============================================================

#[test]
fn default_filters_keep_catalog_order() {
    let filters = Filters::default();
    assert!(filters.is_default());
    assert_eq!(ids(&filters.apply(&catalog())), vec![1, 2, 3]);
}

#[test]
fn any_set_filter_is_not_default() {
    let set = [
        Filters { query: "a".to_owned(), ..Filters::default() },
        Filters { price: PriceRange::parse("50000+"), ..Filters::default() },
        Filters { fuel: FuelFilter::parse("Diesel"), ..Filters::default() },
        Filters { sort: SortOrder::PriceHighLow, ..Filters::default() },
    ];
    for filters in set {
        assert!(!filters.is_default(), "{filters:?}");
    }
    assert!(Filters { fuel: FuelFilter::parse("all"), ..Filters::default() }.is_default());
}

#[test]
fn search_matches_make_or_model_case_insensitively() {
    let by_make = Filters { query: "tEsLa".to_owned(), ..Filters::default() };
    assert_eq!(ids(&by_make.apply(&catalog())), vec![2]);

    let by_model = Filters { query: "f-1".to_owned(), ..Filters::default() };
    assert_eq!(ids(&by_model.apply(&catalog())), vec![3]);
}

#[test]
fn filters_combine_with_and() {
    let filters = Filters {
        price: PriceRange::parse("30001-40000"),
        fuel: FuelFilter::parse("Electric"),
        ..Filters::default()
    };
    assert!(filters.apply(&catalog()).is_empty());

    let filters = Filters { fuel: FuelFilter::parse("Diesel"), ..filters };
    assert_eq!(ids(&filters.apply(&catalog())), vec![3]);
}

#[test]
fn sort_by_price_both_directions() {
    let low_high = Filters { sort: SortOrder::PriceLowHigh, ..Filters::default() };
    assert_eq!(ids(&low_high.apply(&catalog())), vec![1, 3, 2]);

    let high_low = Filters { sort: SortOrder::PriceHighLow, ..Filters::default() };
    assert_eq!(ids(&high_low.apply(&catalog())), vec![2, 3, 1]);
}

#[test]
fn sort_is_stable_for_equal_prices() {
    let cars = vec![
        make_car(10, "A", "One", 5_000, "Gasoline"),
        make_car(11, "B", "Two", 5_000, "Gasoline"),
        make_car(12, "C", "Three", 1_000, "Gasoline"),
    ];
    let filters = Filters { sort: SortOrder::PriceLowHigh, ..Filters::default() };
    assert_eq!(ids(&filters.apply(&cars)), vec![12, 10, 11]);
}

// =============================================================
// Pagination
// =============================================================

fn many(n: u32) -> Vec<Car> {
    (1..=n).map(|id| make_car(id, "Make", "Model", u64::from(id) * 1_000, "Gasoline")).collect()
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(9), 1);
    assert_eq!(page_count(10), 2);
    assert_eq!(page_count(27), 3);
}

#[test]
fn page_slice_returns_nine_per_page() {
    let cars = many(20);
    assert_eq!(ids(&page_slice(&cars, 1)), (1..=9).collect::<Vec<_>>());
    assert_eq!(ids(&page_slice(&cars, 3)), vec![19, 20]);
}

#[test]
fn page_slice_out_of_range_is_empty() {
    let cars = many(5);
    assert!(page_slice(&cars, 0).is_empty());
    assert!(page_slice(&cars, 2).is_empty());
}

// =============================================================
// CatalogState
// =============================================================

#[test]
fn catalog_state_starts_loading() {
    let state = CatalogState::default();
    assert!(state.loading);
    assert!(state.cars.is_empty());
    assert!(state.error.is_none());
}
