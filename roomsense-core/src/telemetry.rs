//! Wire payload types
//!
//! The JSON shapes consumed by the downstream logger. Field names and
//! decimal precision are part of the external contract: temperature and
//! humidity carry two decimals, pressure one, and a physical field is
//! `null` only when its channel has never produced a valid reading
//! since boot. The payload constructors own the rounding so every
//! publish site formats identically.

use crate::pipeline::Snapshot;

/// Round to two decimal places
fn round2(value: f32) -> f32 {
    libm::roundf(value * 100.0) / 100.0
}

/// Round to one decimal place
fn round1(value: f32) -> f32 {
    libm::roundf(value * 10.0) / 10.0
}

/// The `data` topic payload: one validated/substituted reading per
/// channel plus the monotonic timestamp
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataPayload {
    /// Temperature in Celsius, two decimals
    #[cfg_attr(feature = "serde", serde(rename = "temp_C"))]
    pub temp_c: Option<f32>,

    /// Relative humidity in percent, two decimals
    #[cfg_attr(feature = "serde", serde(rename = "rh_pct"))]
    pub rh_pct: Option<f32>,

    /// Barometric pressure in hectopascal, one decimal
    #[cfg_attr(feature = "serde", serde(rename = "press_hPa"))]
    pub press_hpa: Option<f32>,

    /// Milliseconds since process start
    pub ms: u64,
}

impl DataPayload {
    /// Payload from a pipeline snapshot, applying the wire rounding
    pub fn from_snapshot(snapshot: &Snapshot, ms: u64) -> Self {
        Self {
            temp_c: snapshot.temp_c.map(round2),
            rh_pct: snapshot.rh_pct.map(round2),
            press_hpa: snapshot.press_hpa.map(round1),
            ms,
        }
    }
}

/// The `heartbeat` topic payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Heartbeat {
    /// Milliseconds since process start
    pub ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_matches_wire_precision() {
        let snapshot = Snapshot {
            temp_c: Some(23.456),
            rh_pct: Some(45.984),
            press_hpa: Some(1013.25),
        };
        let payload = DataPayload::from_snapshot(&snapshot, 42);

        assert_eq!(payload.temp_c, Some(23.46));
        assert_eq!(payload.rh_pct, Some(45.98));
        assert_eq!(payload.press_hpa, Some(1013.3));
        assert_eq!(payload.ms, 42);
    }

    #[test]
    fn missing_channels_stay_missing() {
        let snapshot = Snapshot {
            temp_c: None,
            rh_pct: Some(50.0),
            press_hpa: None,
        };
        let payload = DataPayload::from_snapshot(&snapshot, 0);
        assert_eq!(payload.temp_c, None);
        assert_eq!(payload.press_hpa, None);
    }
}
