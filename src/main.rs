mod model;
mod server;

use std::sync::Arc;

use dioxus_logger::tracing::{self, Level};

use crate::server::{
    config::Config, error::AppError, ledger::savapage::SavaPageClient,
    scheduler::reconciliation, service::reader::CardReader, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dioxus_logger::init(Level::INFO)
        .map_err(|e| AppError::InternalError(format!("Failed to initialize logger: {}", e)))?;

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let ledger = SavaPageClient::new(
        http_client,
        config.savapage_url.clone(),
        config.savapage_admin.clone(),
        config.savapage_password.clone(),
    );

    let channel = startup::connect_to_broker(&config.mqtt).await?;
    let card_reader = CardReader::new(Arc::new(channel), config.reader.clone());

    let _scheduler = reconciliation::start_scheduler(
        db.clone(),
        &config.reconcile_schedule,
        config.reconcile_grace,
    )
    .await?;

    let router = server::router::router()
        .with_state(AppState::new(db, card_reader, Arc::new(ledger)))
        .layer(startup::cors_layer());

    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    tracing::info!("Listening on {}", config.server_address);

    axum::serve(listener, router).await?;

    Ok(())
}
