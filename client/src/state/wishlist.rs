//! Wishlist membership rules shared by every surface.
//!
//! DESIGN
//! ======
//! Every function here is pure: it takes the current collection snapshot and
//! returns the next one plus an [`Outcome`]. Persisting the result is the
//! caller's job (see `util::wishlist_store`), which keeps these rules
//! testable without a storage backend.
//!
//! Intent no-ops (`AlreadyPresent`, `NotPresent`) are ordinary outcomes, not
//! errors. Surfaces turn them into notices.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use crate::net::types::{Car, CarId};

/// Result of applying a wishlist intent to a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added,
    AlreadyPresent,
    Removed,
    NotPresent,
}

impl Outcome {
    /// `true` when the collection changed and must be saved.
    pub fn is_change(self) -> bool {
        matches!(self, Self::Added | Self::Removed)
    }

    /// User-facing notice text for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Added => "Car added to wishlist",
            Self::AlreadyPresent => "Car is already in your wishlist",
            Self::Removed => "Car removed from wishlist",
            Self::NotPresent => "Car is not in your wishlist",
        }
    }
}

/// A user request against the wishlist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Add(Car),
    Remove(CarId),
    /// Add when absent, remove when present.
    Toggle(Car),
}

/// `true` iff some element of `collection` has `id`.
pub fn is_member(collection: &[Car], id: CarId) -> bool {
    collection.iter().any(|car| car.id == id)
}

/// Append `car` unless its id is already present.
pub fn add(mut collection: Vec<Car>, car: Car) -> (Vec<Car>, Outcome) {
    if is_member(&collection, car.id) {
        return (collection, Outcome::AlreadyPresent);
    }
    collection.push(car);
    (collection, Outcome::Added)
}

/// Drop every element with `id`, or report `NotPresent`.
pub fn remove(mut collection: Vec<Car>, id: CarId) -> (Vec<Car>, Outcome) {
    if !is_member(&collection, id) {
        return (collection, Outcome::NotPresent);
    }
    collection.retain(|car| car.id != id);
    (collection, Outcome::Removed)
}

/// Dispatch to [`add`] or [`remove`] by current membership.
pub fn toggle(collection: Vec<Car>, car: Car) -> (Vec<Car>, Outcome) {
    if is_member(&collection, car.id) {
        remove(collection, car.id)
    } else {
        add(collection, car)
    }
}

/// Apply any [`Intent`] to `collection`.
pub fn apply_intent(collection: Vec<Car>, intent: Intent) -> (Vec<Car>, Outcome) {
    match intent {
        Intent::Add(car) => add(collection, car),
        Intent::Remove(id) => remove(collection, id),
        Intent::Toggle(car) => toggle(collection, car),
    }
}

/// Per-surface view of whether one displayed car is wishlisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Membership {
    #[default]
    NotWishlisted,
    Wishlisted,
}

impl Membership {
    /// Derive membership of `id` from a loaded collection.
    pub fn derive(collection: &[Car], id: CarId) -> Self {
        if is_member(collection, id) { Self::Wishlisted } else { Self::NotWishlisted }
    }

    pub fn is_wishlisted(self) -> bool {
        self == Self::Wishlisted
    }

    /// Intent a single add/remove button issues from this state.
    pub fn button_intent(self, car: &Car) -> Intent {
        match self {
            Self::NotWishlisted => Intent::Add(car.clone()),
            Self::Wishlisted => Intent::Remove(car.id),
        }
    }
}
