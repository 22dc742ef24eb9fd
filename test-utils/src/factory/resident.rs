//! Resident factory for creating test directory entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test residents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let resident = ResidentFactory::new(&db)
///     .name("alice")
///     .code("ABC123")
///     .build()
///     .await?;
/// ```
pub struct ResidentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
}

impl<'a> ResidentFactory<'a> {
    /// Creates a new ResidentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"resident_{id}"`
    /// - code: `"CODE{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("resident_{}", id),
            code: format!("CODE{}", id),
        }
    }

    /// Sets the resident name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the card code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Builds and inserts the resident entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::resident::Model)` - Created resident entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::resident::Model, DbErr> {
        entity::resident::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a resident with default values.
///
/// Shorthand for `ResidentFactory::new(db).build().await`.
pub async fn create_resident(db: &DatabaseConnection) -> Result<entity::resident::Model, DbErr> {
    ResidentFactory::new(db).build().await
}
