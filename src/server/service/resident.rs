//! Resident service for business logic.
//!
//! This module provides the `ResidentService` for maintaining the resident directory. It
//! validates input, turns uniqueness conflicts into client errors and reports unknown
//! residents as not found.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::resident::ResidentRepository,
    error::AppError,
    model::resident::{CreateResidentParam, Resident},
};

pub struct ResidentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResidentService<'a> {
    /// Creates a new ResidentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ResidentService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a resident.
    ///
    /// # Returns
    /// - `Ok(Resident)` - The created resident
    /// - `Err(AppError::BadRequest)` - Empty name or code, or either is already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateResidentParam) -> Result<Resident, AppError> {
        let param = CreateResidentParam {
            name: non_empty("name", param.name)?,
            code: non_empty("code", param.code)?,
        };

        ResidentRepository::new(self.db)
            .create(param)
            .await
            .map_err(conflict_as_bad_request)
    }

    /// Gets a resident by name.
    ///
    /// # Returns
    /// - `Ok(Resident)` - The resident
    /// - `Err(AppError::NotFound)` - No resident with that name
    pub async fn get(&self, name: &str) -> Result<Resident, AppError> {
        ResidentRepository::new(self.db)
            .find_by_name(name)
            .await?
            .ok_or_else(|| not_found(name))
    }

    pub async fn get_all(&self) -> Result<Vec<Resident>, AppError> {
        Ok(ResidentRepository::new(self.db).get_all().await?)
    }

    /// Assigns a new card code; a missing code leaves the resident unchanged.
    ///
    /// # Returns
    /// - `Ok(Resident)` - The resident after the update
    /// - `Err(AppError::NotFound)` - No resident with that name
    /// - `Err(AppError::BadRequest)` - Empty code, or the code belongs to someone else
    pub async fn update_code(&self, name: &str, code: Option<String>) -> Result<Resident, AppError> {
        let Some(code) = code else {
            return self.get(name).await;
        };
        let code = non_empty("code", code)?;

        ResidentRepository::new(self.db)
            .update_code(name, code)
            .await
            .map_err(conflict_as_bad_request)?
            .ok_or_else(|| not_found(name))
    }

    /// Removes a resident from the directory.
    ///
    /// # Returns
    /// - `Ok(())` - Resident deleted
    /// - `Err(AppError::NotFound)` - No resident with that name
    pub async fn delete(&self, name: &str) -> Result<(), AppError> {
        if !ResidentRepository::new(self.db).delete(name).await? {
            return Err(not_found(name));
        }

        Ok(())
    }
}

fn non_empty(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("Resident {} must not be empty", field)));
    }
    Ok(value)
}

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Resident '{}' not found", name))
}

fn conflict_as_bad_request(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            AppError::BadRequest(format!("Resident name or code already registered: {}", detail))
        }
        _ => AppError::DbErr(err),
    }
}
