use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleType::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleType::Id))
                    .col(string(ArticleType::Name))
                    .col(text_null(ArticleType::Desc))
                    .col(integer(ArticleType::IconCodepoint))
                    .col(string(ArticleType::Color))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleType {
    Table,
    Id,
    Name,
    Desc,
    IconCodepoint,
    Color,
}
