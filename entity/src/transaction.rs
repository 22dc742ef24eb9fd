use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: DateTimeUtc,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article_transaction::Entity")]
    ArticleTransaction,
}

impl Related<super::article_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
