use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "charge_intent")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resident_name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub date: DateTimeUtc,
    pub details: String,
    pub line_items: Json,
    pub status: String,
    #[sea_orm(nullable)]
    pub transaction_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub error: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
