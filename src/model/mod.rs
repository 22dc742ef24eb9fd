//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON contract of the `/api` routes. The server converts them to
//! and from its domain models at the controller boundary.

pub mod api;
pub mod charge_intent;
pub mod resident;
pub mod transaction;
