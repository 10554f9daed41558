//! Message publication
//!
//! Serializes the core payload types onto the three device topics.
//! Status is retained at QoS 1 - the downstream logger subscribes at
//! QoS 1 and late joiners must see the device state. Heartbeat and data
//! go at QoS 0: the cadence is fixed, so an individual lost message
//! costs nothing and nothing is queued for redelivery.

use roomsense_core::{
    pipeline::Snapshot,
    readiness::ReadinessState,
    telemetry::{DataPayload, Heartbeat},
};
use rumqttc::QoS;
use thiserror::Error;

use crate::transport::{Transport, TransportError};

/// Failures at a publish site
#[derive(Debug, Error)]
pub enum PublishError {
    /// The transport refused or lost the message
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Payload serialization failed
    #[error("payload encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The three topics derived from a device identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topics {
    /// Retained device state: `warming_up` or `ready`
    pub status: String,
    /// Liveness beacon
    pub heartbeat: String,
    /// Validated telemetry
    pub data: String,
}

impl Topics {
    /// Topic set for one device id
    pub fn for_device(device_id: &str) -> Self {
        Self {
            status: format!("devices/{device_id}/status"),
            heartbeat: format!("devices/{device_id}/heartbeat"),
            data: format!("devices/{device_id}/data"),
        }
    }
}

/// Serializes and routes the node's outbound messages
#[derive(Debug, Clone)]
pub struct Publisher {
    topics: Topics,
}

impl Publisher {
    /// Publisher for one device id
    pub fn new(device_id: &str) -> Self {
        Self {
            topics: Topics::for_device(device_id),
        }
    }

    /// The derived topic set
    pub fn topics(&self) -> &Topics {
        &self.topics
    }

    /// Publish the retained device status
    pub fn status<T: Transport>(
        &self,
        transport: &mut T,
        state: ReadinessState,
    ) -> Result<(), PublishError> {
        transport.publish(
            &self.topics.status,
            state.as_str().as_bytes(),
            QoS::AtLeastOnce,
            true,
        )?;
        Ok(())
    }

    /// Publish a liveness heartbeat
    pub fn heartbeat<T: Transport>(&self, transport: &mut T, ms: u64) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(&Heartbeat { ms })?;
        transport.publish(&self.topics.heartbeat, &payload, QoS::AtMostOnce, false)?;
        Ok(())
    }

    /// Publish one telemetry snapshot
    pub fn data<T: Transport>(
        &self,
        transport: &mut T,
        snapshot: &Snapshot,
        ms: u64,
    ) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(&DataPayload::from_snapshot(snapshot, ms))?;
        transport.publish(&self.topics.data, &payload, QoS::AtMostOnce, false)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topics_follow_device_id() {
        let topics = Topics::for_device("mkr-kitchen-01");
        assert_eq!(topics.status, "devices/mkr-kitchen-01/status");
        assert_eq!(topics.heartbeat, "devices/mkr-kitchen-01/heartbeat");
        assert_eq!(topics.data, "devices/mkr-kitchen-01/data");
    }

    #[test]
    fn data_payload_wire_shape() {
        let snapshot = Snapshot {
            temp_c: Some(23.456),
            rh_pct: Some(45.0),
            press_hpa: None,
        };
        // Round-trip through the actual wire bytes: serde_json writes
        // f32 fields with shortest-f32 formatting, which a Value-level
        // comparison would miss
        let bytes = serde_json::to_vec(&DataPayload::from_snapshot(&snapshot, 12_000)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "temp_C": 23.46,
                "rh_pct": 45.0,
                "press_hPa": null,
                "ms": 12_000,
            })
        );
    }

    #[test]
    fn heartbeat_wire_shape() {
        let value = serde_json::to_value(Heartbeat { ms: 15_000 }).unwrap();
        assert_eq!(value, json!({ "ms": 15_000 }));
    }
}
