//! RoomSense node entry point
//!
//! Wires the acquisition loop to the configured broker and the sensor
//! bus, then runs forever. Log verbosity comes from `RUST_LOG`
//! (default `info`).

use std::time::Duration;

use tracing::{error, info};

use roomsense_core::time::BootClock;
use roomsense_node::{
    config,
    indicator::LogIndicator,
    node::{NodeConfig, SensorNode},
    sim::SimulatedBus,
    transport::{MqttTransport, RetryPolicy},
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!(
        version = roomsense_core::VERSION,
        device = config::DEVICE_ID,
        broker = config::BROKER_HOST,
        "roomsense node starting"
    );

    let transport = MqttTransport::new(
        config::BROKER_HOST,
        config::BROKER_PORT,
        config::DEVICE_ID,
        RetryPolicy::fixed(Duration::from_millis(config::RECONNECT_DELAY_MS)),
    )
    .with_keepalive(Duration::from_secs(config::MQTT_KEEPALIVE_SECS));

    let mut node = match SensorNode::new(
        SimulatedBus::new(),
        transport,
        BootClock::new(),
        LogIndicator,
        config::DEVICE_ID,
        NodeConfig::default(),
    ) {
        Ok(node) => node,
        Err(e) => {
            error!("sensor bus init failed: {e}");
            return;
        }
    };

    node.run();
}
