//! SeaORM entity models for the rupay database schema.

pub mod prelude;

pub mod article;
pub mod article_transaction;
pub mod article_type;
pub mod charge_intent;
pub mod resident;
pub mod transaction;
