use crate::server::data::article::ArticleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::helpers::create_article_with_type};

mod missing_ids;
