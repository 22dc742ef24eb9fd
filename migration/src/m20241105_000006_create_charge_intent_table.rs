use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChargeIntent::Table)
                    .if_not_exists()
                    .col(pk_auto(ChargeIntent::Id))
                    .col(string(ChargeIntent::ResidentName))
                    .col(double(ChargeIntent::Price))
                    .col(timestamp_with_time_zone(ChargeIntent::Date))
                    .col(string(ChargeIntent::Details))
                    .col(json(ChargeIntent::LineItems))
                    .col(string(ChargeIntent::Status))
                    .col(integer_null(ChargeIntent::TransactionId))
                    .col(text_null(ChargeIntent::Error))
                    .col(
                        timestamp_with_time_zone(ChargeIntent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ChargeIntent::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The reconciliation sweep scans by status and age.
        manager
            .create_index(
                Index::create()
                    .name("idx_charge_intent_status_updated_at")
                    .table(ChargeIntent::Table)
                    .col(ChargeIntent::Status)
                    .col(ChargeIntent::UpdatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChargeIntent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChargeIntent {
    Table,
    Id,
    ResidentName,
    Price,
    Date,
    Details,
    LineItems,
    Status,
    TransactionId,
    Error,
    CreatedAt,
    UpdatedAt,
}
