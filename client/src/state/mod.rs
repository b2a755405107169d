//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`catalog`, `wishlist`, `notice`) so pages and
//! components depend on small focused models. Everything here is plain data
//! and pure functions; Leptos signals wrap it at the page level.

pub mod catalog;
pub mod notice;
pub mod wishlist;
