//! Compile-time node configuration
//!
//! One device, one broker, fixed cadences. Change here, reflash. If you
//! change `DEVICE_ID`, update the downstream logger to match.

/// Device identifier; first segment of every topic
pub const DEVICE_ID: &str = "mkr-kitchen-01";

/// MQTT broker host
pub const BROKER_HOST: &str = "test.mosquitto.org";

/// MQTT broker port (unencrypted; the data is public)
pub const BROKER_PORT: u16 = 1883;

/// Consecutive valid samples per channel before telemetry starts
pub use roomsense_core::constants::READINESS_THRESHOLD;

/// Consecutive invalid samples that trigger a channel stream restart
pub use roomsense_core::constants::SELF_HEAL_THRESHOLD;

/// Telemetry publish interval in milliseconds
pub const TELEMETRY_INTERVAL_MS: u64 = 1000;

/// Heartbeat publish interval in milliseconds
pub const HEARTBEAT_INTERVAL_MS: u64 = 15_000;

/// Alive-indicator toggle interval in milliseconds
pub const ALIVE_TOGGLE_MS: u64 = 800;

/// Sensor poll rate in hertz; the loop runs at this cadence
pub const SENSOR_RATE_HZ: f32 = 5.0;

/// Delay between connection retry attempts in milliseconds
pub const RECONNECT_DELAY_MS: u64 = 2000;

/// MQTT keep-alive interval in seconds
pub const MQTT_KEEPALIVE_SECS: u64 = 30;
