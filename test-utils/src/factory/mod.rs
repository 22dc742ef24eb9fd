//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories for rows
//! with foreign keys take the referenced ids explicitly; `helpers` bundles the common
//! dependency chains.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let resident = factory::resident::ResidentFactory::new(&db)
//!     .name("alice")
//!     .code("ABC123")
//!     .build()
//!     .await?;
//!
//! let (article_type, article) = factory::helpers::create_article_with_type(&db).await?;
//! ```

pub mod article;
pub mod article_type;
pub mod charge_intent;
pub mod helpers;
pub mod resident;
pub mod transaction;

pub use article::create_article;
pub use article_type::create_article_type;
pub use charge_intent::create_charge_intent;
pub use resident::create_resident;
pub use transaction::create_transaction;
