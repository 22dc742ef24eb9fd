//! Resident domain models and parameters.
//!
//! A resident is a bar customer identified by a unique name (also their SavaPage account
//! name) and a unique card code.

use crate::model::resident::{CreateResidentDto, ResidentDto};

/// Resident registered in the local directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Resident {
    pub id: i32,
    /// Unique name, also used as the SavaPage account name.
    pub name: String,
    /// Unique code stored on the resident's card.
    pub code: String,
}

impl Resident {
    /// Converts the resident domain model to a DTO for API responses.
    pub fn into_dto(self) -> ResidentDto {
        ResidentDto {
            id: self.id,
            name: self.name,
            code: self.code,
        }
    }

    /// Converts an entity model to a resident domain model at the repository boundary.
    pub fn from_entity(entity: entity::resident::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
        }
    }
}

/// Parameters for registering a resident.
#[derive(Debug, Clone)]
pub struct CreateResidentParam {
    pub name: String,
    pub code: String,
}

impl CreateResidentParam {
    pub fn from_dto(dto: CreateResidentDto) -> Self {
        Self {
            name: dto.name,
            code: dto.code,
        }
    }
}
