pub use super::article::Entity as Article;
pub use super::article_transaction::Entity as ArticleTransaction;
pub use super::article_type::Entity as ArticleType;
pub use super::charge_intent::Entity as ChargeIntent;
pub use super::resident::Entity as Resident;
pub use super::transaction::Entity as Transaction;
