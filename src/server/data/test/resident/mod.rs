use crate::server::{data::resident::ResidentRepository, model::resident::CreateResidentParam};
use entity::prelude::Resident;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::resident::ResidentFactory};

mod create;
mod delete;
mod find_by_code;
mod get_all;
mod update_code;
