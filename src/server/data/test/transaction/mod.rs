use crate::server::{
    data::transaction::TransactionRepository,
    model::transaction::{LineItemParam, UpdateTransactionParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_article_with_type, transaction::TransactionFactory},
};

mod create;
mod create_line_items;
mod delete;
mod find_with_line_items;
mod get_all;
mod update;
