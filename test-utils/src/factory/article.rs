//! Article factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles.
///
/// Requires the id of an existing article type.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    article_type_id: i32,
    name: String,
    purchase_price: f64,
    resell_price: f64,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Article {id}"`
    /// - purchase_price: `1.0`
    /// - resell_price: `2.5`
    pub fn new(db: &'a DatabaseConnection, article_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            article_type_id,
            name: format!("Article {}", id),
            purchase_price: 1.0,
            resell_price: 2.5,
        }
    }

    /// Sets the article name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the resell price.
    pub fn resell_price(mut self, resell_price: f64) -> Self {
        self.resell_price = resell_price;
        self
    }

    /// Builds and inserts the article into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            name: ActiveValue::Set(self.name),
            desc: ActiveValue::Set(None),
            purchase_price: ActiveValue::Set(self.purchase_price),
            resell_price: ActiveValue::Set(self.resell_price),
            article_type_id: ActiveValue::Set(self.article_type_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values under the given article type.
pub async fn create_article(
    db: &DatabaseConnection,
    article_type_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, article_type_id).build().await
}
