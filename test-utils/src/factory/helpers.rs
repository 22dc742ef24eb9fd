//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an article together with the article type it belongs to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((article_type, article))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::article_type::Model, entity::article::Model), DbErr> {
    let article_type = crate::factory::article_type::create_article_type(db).await?;
    let article = crate::factory::article::create_article(db, article_type.id).await?;

    Ok((article_type, article))
}
