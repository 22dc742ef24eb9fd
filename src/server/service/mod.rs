//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and the card-read and charge flows
//! - **Orchestration**: Coordinating the directory, the card reader and the SavaPage ledger
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Recording charges exactly once through charge intents

pub mod card_read;
pub mod charge;
pub mod reader;
pub mod reconcile;
pub mod resident;
pub mod transaction;
