//! RoomSense node
//!
//! The device executable's library half: MQTT transport with blocking
//! reconnect, publisher, the acquisition control loop, and a simulated
//! sensor bus for desk builds. The portable state machinery (normalize,
//! gate, heal, timers) lives in `roomsense-core`; this crate wires it
//! to a broker and a sensor stack.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod indicator;
pub mod node;
pub mod publisher;
pub mod sim;
pub mod transport;

pub use node::{NodeConfig, SensorNode};
pub use publisher::{PublishError, Publisher, Topics};
pub use transport::{MqttTransport, RetryPolicy, SessionEvent, Transport, TransportError};
