//! HTTP request handlers.
//!
//! Controllers extract path, query and body input, convert DTOs into domain parameters,
//! call the matching service and convert the result back into a DTO. Extractor rejections
//! are taken as `Result`s so malformed input is answered with the shared error body.

pub mod charge_intent;
pub mod resident;
pub mod transaction;
