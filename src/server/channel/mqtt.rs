//! MQTT implementation of the message channel.
//!
//! `rumqttc` splits a connection into a cloneable `AsyncClient` for requests and an
//! `EventLoop` that has to be polled for anything to happen. The event loop runs in a
//! background task for the lifetime of the process: it reconnects after errors, re-subscribes
//! topics that still have waiters, and hands incoming publishes to the `WaiterRegistry`.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use dioxus_logger::tracing;
use rumqttc::{
    AsyncClient, ConnectionError, Event, EventLoop, MqttOptions, Packet, QoS, TlsConfiguration,
    Transport,
};
use tokio::{sync::watch, task::JoinHandle};

use crate::server::{
    channel::{waiters::WaiterRegistry, MessageChannel, Subscription},
    config::{MqttConfig, TlsMaterial},
    error::channel::ChannelError,
};

const KEEP_ALIVE: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RECONNECT_BACKOFF: Duration = Duration::from_secs(2);
const REQUEST_CAPACITY: usize = 16;

/// Message channel backed by an MQTT broker connection.
pub struct MqttChannel {
    client: AsyncClient,
    waiters: WaiterRegistry,
    event_loop: JoinHandle<()>,
}

impl MqttChannel {
    /// Connects to the broker and starts the background event loop.
    ///
    /// Waits for the broker to acknowledge the first connection so that a broken
    /// configuration fails startup instead of the first card read.
    ///
    /// # Arguments
    /// - `config` - Broker address, credentials and optional TLS material
    ///
    /// # Returns
    /// - `Ok(MqttChannel)` - Connected channel
    /// - `Err(ChannelError::InvalidCertificate)` - TLS material is not valid base64
    /// - `Err(ChannelError::ConnectTimeout)` - No acknowledgement within the connect timeout
    pub async fn connect(config: &MqttConfig) -> Result<Self, ChannelError> {
        let options = mqtt_options(config)?;
        let (client, event_loop) = AsyncClient::new(options, REQUEST_CAPACITY);

        let waiters = WaiterRegistry::new();
        let (connected_tx, mut connected_rx) = watch::channel(false);

        let event_loop = tokio::spawn(run_event_loop(
            event_loop,
            client.clone(),
            waiters.clone(),
            connected_tx,
        ));

        let acknowledged = matches!(
            tokio::time::timeout(CONNECT_TIMEOUT, connected_rx.wait_for(|connected| *connected))
                .await,
            Ok(Ok(_))
        );

        if !acknowledged {
            event_loop.abort();
            return Err(ChannelError::ConnectTimeout(CONNECT_TIMEOUT));
        }

        tracing::info!(
            "Connected to MQTT broker {}:{} as {}",
            config.host,
            config.port,
            config.client_id
        );

        Ok(Self {
            client,
            waiters,
            event_loop,
        })
    }
}

impl Drop for MqttChannel {
    fn drop(&mut self) {
        self.event_loop.abort();
    }
}

#[async_trait]
impl MessageChannel for MqttChannel {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), ChannelError> {
        self.client
            .publish(topic, QoS::AtLeastOnce, false, payload.as_bytes().to_vec())
            .await?;

        tracing::debug!("Published '{}' on {}", payload, topic);

        Ok(())
    }

    async fn subscribe_once(&self, topic: &str) -> Result<Subscription, ChannelError> {
        let (waiter_id, receiver) = self.waiters.register(topic)?;

        if let Err(e) = self.client.subscribe(topic, QoS::AtLeastOnce).await {
            self.waiters.remove(topic, waiter_id);
            return Err(e.into());
        }

        Ok(Subscription {
            topic: topic.to_string(),
            waiter_id,
            receiver,
        })
    }

    async fn release(&self, topic: &str, waiter_id: u64) {
        if !self.waiters.remove(topic, waiter_id) {
            // Topic was taken over by a newer waiter which still needs the subscription.
            return;
        }

        if let Err(e) = self.client.unsubscribe(topic).await {
            tracing::warn!("Failed to unsubscribe from {}: {}", topic, e);
        }
    }
}

/// Builds the client options, including mutual TLS when configured.
fn mqtt_options(config: &MqttConfig) -> Result<MqttOptions, ChannelError> {
    let mut options = MqttOptions::new(&config.client_id, &config.host, config.port);
    options.set_keep_alive(KEEP_ALIVE);
    options.set_credentials(&config.username, &config.password);

    if let Some(tls) = &config.tls {
        options.set_transport(Transport::tls_with_config(tls_configuration(tls)?));
    }

    Ok(options)
}

fn tls_configuration(tls: &TlsMaterial) -> Result<TlsConfiguration, ChannelError> {
    Ok(TlsConfiguration::Simple {
        ca: decode_pem("CERT_CA_ROOT", &tls.ca_root)?,
        alpn: None,
        client_auth: Some((
            decode_pem("CERT_MOSQUITTO", &tls.client_cert)?,
            decode_pem("KEY_MOSQUITTO", &tls.client_key)?,
        )),
    })
}

fn decode_pem(name: &'static str, value: &str) -> Result<Vec<u8>, ChannelError> {
    STANDARD
        .decode(value.trim())
        .map_err(|source| ChannelError::InvalidCertificate { name, source })
}

/// Drives the MQTT connection until the client is dropped.
///
/// Polling the event loop after an error reconnects, so errors only cause a pause.
async fn run_event_loop(
    mut event_loop: EventLoop,
    client: AsyncClient,
    waiters: WaiterRegistry,
    connected: watch::Sender<bool>,
) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                tracing::debug!("MQTT connection acknowledged");
                connected.send_replace(true);

                // The event loop is what drains the request queue, so awaiting here could
                // block forever on a full queue.
                for topic in waiters.topics() {
                    if let Err(e) = client.try_subscribe(topic.as_str(), QoS::AtLeastOnce) {
                        tracing::warn!("Failed to re-subscribe to {}: {}", topic, e);
                    }
                }
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                let payload = String::from_utf8_lossy(&publish.payload).into_owned();

                if !waiters.deliver(&publish.topic, payload) {
                    tracing::debug!("Dropped message on {} with no waiter", publish.topic);
                }
            }
            Ok(_) => {}
            Err(ConnectionError::RequestsDone) => {
                tracing::info!("MQTT client dropped, stopping event loop");
                break;
            }
            Err(e) => {
                connected.send_replace(false);
                tracing::error!("MQTT connection error: {}", e);
                tokio::time::sleep(RECONNECT_BACKOFF).await;
            }
        }
    }
}
