//! Article type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test article types.
pub struct ArticleTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
}

impl<'a> ArticleTypeFactory<'a> {
    /// Creates a new ArticleTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Type {id}"`
    /// - color: `"#ffaa00"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Type {}", id),
            color: "#ffaa00".to_string(),
        }
    }

    /// Sets the article type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the article type into the database.
    pub async fn build(self) -> Result<entity::article_type::Model, DbErr> {
        entity::article_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            desc: ActiveValue::Set(None),
            icon_codepoint: ActiveValue::Set(0xe540),
            color: ActiveValue::Set(self.color),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article type with default values.
pub async fn create_article_type(
    db: &DatabaseConnection,
) -> Result<entity::article_type::Model, DbErr> {
    ArticleTypeFactory::new(db).build().await
}
