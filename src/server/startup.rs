use std::time::Duration;

use tower_http::cors::CorsLayer;

use crate::server::{
    channel::mqtt::MqttChannel,
    config::{Config, MqttConfig},
    error::AppError,
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations to bring the schema up to date. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for SavaPage requests.
///
/// Redirects are disabled so credentials are never forwarded to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Connects to the MQTT broker the card readers listen on.
///
/// # Returns
/// - `Ok(MqttChannel)` - Connected channel; reconnects are handled by its event loop
/// - `Err(AppError::ChannelErr)` - Invalid TLS material or the broker did not accept the
///   connection in time
pub async fn connect_to_broker(config: &MqttConfig) -> Result<MqttChannel, AppError> {
    Ok(MqttChannel::connect(config).await?)
}

/// CORS policy for the bar frontend: any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
