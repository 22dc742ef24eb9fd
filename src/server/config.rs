use std::time::Duration;

use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::reader::ReaderSettings,
    util::parse::{env_or, optional_env, required_env},
};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8888";
const DEFAULT_MQTT_CLIENT_ID: &str = "rupay-bar-backend";
const DEFAULT_COMMAND_TOPIC: &str = "bar1/read";
const DEFAULT_REPLY_TOPIC: &str = "bar1/client";
const DEFAULT_READER_TIMEOUT_SECS: u64 = 60;
const DEFAULT_READER_QUEUE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_RECONCILE_GRACE_SECS: u64 = 30;
const DEFAULT_RECONCILE_SCHEDULE: &str = "0 * * * * *";

const MQTT_PORT: u16 = 1883;
const MQTTS_PORT: u16 = 8883;

pub struct Config {
    pub database_url: String,
    pub server_address: String,

    pub savapage_url: Url,
    pub savapage_admin: String,
    pub savapage_password: String,

    pub mqtt: MqttConfig,
    pub reader: ReaderSettings,

    pub reconcile_grace: Duration,
    pub reconcile_schedule: String,
}

/// Connection settings for the MQTT broker.
#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub host: String,
    pub port: u16,
    pub client_id: String,
    pub username: String,
    pub password: String,
    /// Present when the broker URL uses a TLS scheme.
    pub tls: Option<TlsMaterial>,
}

/// Base64-encoded PEM blobs for mutual TLS with the broker.
#[derive(Debug, Clone)]
pub struct TlsMaterial {
    pub ca_root: String,
    pub client_cert: String,
    pub client_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let broker = required_env("MQTT_BROKER")?;
        let (host, port, use_tls) = parse_broker_url(&broker)?;

        let tls = if use_tls {
            Some(TlsMaterial {
                ca_root: required_env("CERT_CA_ROOT")?,
                client_cert: required_env("CERT_MOSQUITTO")?,
                client_key: required_env("KEY_MOSQUITTO")?,
            })
        } else {
            None
        };

        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            server_address: optional_env("SERVER_ADDRESS")
                .map(|address| normalize_server_address(&address))
                .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            savapage_url: parse_base_url("SAVAPAGE_API", &required_env("SAVAPAGE_API")?)?,
            savapage_admin: required_env("SAVAPAGE_ADMIN")?,
            savapage_password: required_env("SAVAPAGE_PASSWORD")?,
            mqtt: MqttConfig {
                host,
                port,
                client_id: optional_env("MQTT_CLIENT_ID")
                    .unwrap_or_else(|| DEFAULT_MQTT_CLIENT_ID.to_string()),
                username: required_env("MQTT_CLIENT_NAME")?,
                password: required_env("MQTT_CLIENT_PASSWORD")?,
                tls,
            },
            reader: ReaderSettings {
                command_topic: optional_env("READER_COMMAND_TOPIC")
                    .unwrap_or_else(|| DEFAULT_COMMAND_TOPIC.to_string()),
                reply_topic: optional_env("READER_REPLY_TOPIC")
                    .unwrap_or_else(|| DEFAULT_REPLY_TOPIC.to_string()),
                read_timeout: Duration::from_secs(env_or(
                    "READER_TIMEOUT_SECS",
                    DEFAULT_READER_TIMEOUT_SECS,
                )?),
                queue_timeout: Duration::from_secs(env_or(
                    "READER_QUEUE_TIMEOUT_SECS",
                    DEFAULT_READER_QUEUE_TIMEOUT_SECS,
                )?),
                correlate: env_or("READER_CORRELATE", false)?,
            },
            reconcile_grace: Duration::from_secs(env_or(
                "RECONCILE_GRACE_SECS",
                DEFAULT_RECONCILE_GRACE_SECS,
            )?),
            reconcile_schedule: optional_env("RECONCILE_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_RECONCILE_SCHEDULE.to_string()),
        })
    }
}

/// Splits a broker URL such as `ssl://broker:8883` into host, port and TLS flag.
///
/// `ssl`, `tls`, `mqtts` select TLS; `tcp` and `mqtt` select plain TCP. A missing port
/// falls back to the scheme's well-known port.
fn parse_broker_url(value: &str) -> Result<(String, u16, bool), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: "MQTT_BROKER".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(value).map_err(|e| invalid(&e.to_string()))?;

    let use_tls = match url.scheme() {
        "ssl" | "tls" | "mqtts" => true,
        "tcp" | "mqtt" => false,
        _ => return Err(invalid("expected one of ssl, tls, mqtts, tcp or mqtt scheme")),
    };

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| invalid("missing host"))?
        .to_string();

    let port = url
        .port()
        .unwrap_or(if use_tls { MQTTS_PORT } else { MQTT_PORT });

    Ok((host, port, use_tls))
}

/// Parses the SavaPage base URL, making sure relative paths join below it.
fn parse_base_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    let mut base = value.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    Url::parse(&base).map_err(|e| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Accepts a bare port (`8888`) as well as a full bind address.
fn normalize_server_address(value: &str) -> String {
    let value = value.trim();
    if value.parse::<u16>().is_ok() {
        format!("0.0.0.0:{}", value)
    } else {
        value.to_string()
    }
}
