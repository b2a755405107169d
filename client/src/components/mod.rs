//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render listing chrome and the car card while reading/writing
//! shared state from Leptos context providers.

pub mod car_card;
pub mod filter_bar;
pub mod notices;
pub mod pagination;
pub mod site_header;
