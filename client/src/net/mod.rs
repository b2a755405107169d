//! Catalog networking and shared record types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` holds the car DTO used across the crate; `api` wraps the public
//! catalog REST endpoints.

pub mod api;
pub mod types;
