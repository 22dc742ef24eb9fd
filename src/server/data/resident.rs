//! Resident data repository for database operations.
//!
//! This module provides the `ResidentRepository` for the resident directory: the mapping
//! from card code to resident name used by the card-read flow, plus its maintenance.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::resident::{CreateResidentParam, Resident};

/// Repository providing database operations for the resident directory.
pub struct ResidentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResidentRepository<'a> {
    /// Creates a new ResidentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ResidentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new resident.
    ///
    /// # Arguments
    /// - `param` - Unique name and unique card code
    ///
    /// # Returns
    /// - `Ok(Resident)` - The created resident
    /// - `Err(DbErr)` - Database error, including unique constraint violations on name
    ///   or code
    pub async fn create(&self, param: CreateResidentParam) -> Result<Resident, DbErr> {
        let entity = entity::resident::ActiveModel {
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(param.code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Resident::from_entity(entity))
    }

    /// Finds the resident a card code is registered to.
    ///
    /// # Arguments
    /// - `code` - Card code as read by the reader
    ///
    /// # Returns
    /// - `Ok(Some(Resident))` - Resident owning the code
    /// - `Ok(None)` - Code is not registered
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Resident>, DbErr> {
        let entity = entity::prelude::Resident::find()
            .filter(entity::resident::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Resident::from_entity))
    }

    /// Finds a resident by their unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Resident>, DbErr> {
        let entity = entity::prelude::Resident::find()
            .filter(entity::resident::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Resident::from_entity))
    }

    /// Gets all residents ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Resident>, DbErr> {
        let entities = entity::prelude::Resident::find()
            .order_by_asc(entity::resident::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Resident::from_entity).collect())
    }

    /// Assigns a new card code to a resident.
    ///
    /// # Arguments
    /// - `name` - Name of the resident to update
    /// - `code` - New card code
    ///
    /// # Returns
    /// - `Ok(Some(Resident))` - The updated resident
    /// - `Ok(None)` - No resident with that name
    /// - `Err(DbErr)` - Database error, including a code already owned by someone else
    pub async fn update_code(&self, name: &str, code: String) -> Result<Option<Resident>, DbErr> {
        let Some(entity) = entity::prelude::Resident::find()
            .filter(entity::resident::Column::Name.eq(name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::resident::ActiveModel = entity.into();
        active.code = ActiveValue::Set(code);
        let entity = active.update(self.db).await?;

        Ok(Some(Resident::from_entity(entity)))
    }

    /// Deletes a resident by name.
    ///
    /// # Returns
    /// - `Ok(true)` - Resident deleted
    /// - `Ok(false)` - No resident with that name
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Resident::delete_many()
            .filter(entity::resident::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
