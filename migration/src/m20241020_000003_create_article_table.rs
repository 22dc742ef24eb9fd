use sea_orm_migration::{prelude::*, schema::*};

use super::m20241020_000002_create_article_type_table::ArticleType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(string(Article::Name))
                    .col(text_null(Article::Desc))
                    .col(double(Article::PurchasePrice))
                    .col(double(Article::ResellPrice))
                    .col(integer(Article::ArticleTypeId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_article_type_id")
                            .from(Article::Table, Article::ArticleTypeId)
                            .to(ArticleType::Table, ArticleType::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Name,
    Desc,
    PurchasePrice,
    ResellPrice,
    ArticleTypeId,
}
