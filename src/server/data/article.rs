//! Article lookups used to validate sale line items.

use std::collections::HashSet;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the ids in `article_ids` that have no article, sorted and deduplicated.
    ///
    /// # Arguments
    /// - `article_ids` - Ids referenced by line items
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Unknown ids; empty when every article exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn missing_ids(&self, article_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if article_ids.is_empty() {
            return Ok(Vec::new());
        }

        let requested: HashSet<i32> = article_ids.iter().copied().collect();

        let existing: HashSet<i32> = entity::prelude::Article::find()
            .filter(entity::article::Column::Id.is_in(requested.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|article| article.id)
            .collect();

        let mut missing: Vec<i32> = requested.difference(&existing).copied().collect();
        missing.sort_unstable();

        Ok(missing)
    }
}
