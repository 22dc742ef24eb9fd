pub use sea_orm_migration::prelude::*;

mod m20241020_000001_create_resident_table;
mod m20241020_000002_create_article_type_table;
mod m20241020_000003_create_article_table;
mod m20241020_000004_create_transaction_table;
mod m20241020_000005_create_article_transaction_table;
mod m20241105_000006_create_charge_intent_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241020_000001_create_resident_table::Migration),
            Box::new(m20241020_000002_create_article_type_table::Migration),
            Box::new(m20241020_000003_create_article_table::Migration),
            Box::new(m20241020_000004_create_transaction_table::Migration),
            Box::new(m20241020_000005_create_article_transaction_table::Migration),
            Box::new(m20241105_000006_create_charge_intent_table::Migration),
        ]
    }
}
