use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "article")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub desc: Option<String>,
    #[sea_orm(column_type = "Double")]
    pub purchase_price: f64,
    #[sea_orm(column_type = "Double")]
    pub resell_price: f64,
    pub article_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::article_type::Entity",
        from = "Column::ArticleTypeId",
        to = "super::article_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ArticleType,
    #[sea_orm(has_many = "super::article_transaction::Entity")]
    ArticleTransaction,
}

impl Related<super::article_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleType.def()
    }
}

impl Related<super::article_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArticleTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
