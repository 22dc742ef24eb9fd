//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories used inside the charge commit are generic over `ConnectionTrait` so they
//! run the same against a `DatabaseConnection` or an open `DatabaseTransaction`.

pub mod article;
pub mod charge_intent;
pub mod resident;
pub mod transaction;

#[cfg(test)]
mod test;
