//! Server implementation with API endpoints and business logic.
//!
//! This module contains the complete backend of the bar point of sale: the HTTP API, the
//! card-read and charge flows, data access and the integrations with the MQTT card readers
//! and the SavaPage credit ledger. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Card-read and charge flows, directory and transaction administration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Integrations
//!
//! - **Channel** (`channel/`) - Publish/subscribe message channel to the card readers (MQTT)
//! - **Ledger** (`ledger/`) - Credit ledger balances and debits (SavaPage)
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, card reader, ledger)
//! - **Startup** (`startup`) - Initialization of database, HTTP client, broker and CORS
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron job reconciling charge intents
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the controller
//! 2. **Controller** extracts input, converts DTOs to params, calls service
//! 3. **Service** executes business logic against the data layer, reader and ledger
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod channel;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod ledger;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
