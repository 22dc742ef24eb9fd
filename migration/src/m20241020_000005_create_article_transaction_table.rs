use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20241020_000003_create_article_table::Article,
    m20241020_000004_create_transaction_table::Transaction,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(ArticleTransaction::Id))
                    .col(integer(ArticleTransaction::ArticleId))
                    .col(integer(ArticleTransaction::TransactionId))
                    .col(integer(ArticleTransaction::Amount))
                    .col(double(ArticleTransaction::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_transaction_article_id")
                            .from(ArticleTransaction::Table, ArticleTransaction::ArticleId)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_transaction_transaction_id")
                            .from(ArticleTransaction::Table, ArticleTransaction::TransactionId)
                            .to(Transaction::Table, Transaction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleTransaction {
    Table,
    Id,
    ArticleId,
    TransactionId,
    Amount,
    Price,
}
