//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (catalog fetch, wishlist load)
//! and delegates rendering details to `components`.

pub mod car_detail;
pub mod listing;
pub mod wishlist;
