//! Acquisition core for RoomSense
//!
//! State machinery for a three-channel environmental sensor node:
//! normalization of raw readings, gated startup, per-channel
//! self-healing, and the fixed-interval timers that pace publication.
//!
//! Key constraints:
//! - No heap allocation in the sample path
//! - Single thread of control, no locks
//! - Portable: runs on the device and in host-side tests unchanged
//!
//! ```no_run
//! use roomsense_core::{Normalize, TemperatureNormalizer};
//!
//! let normalizer = TemperatureNormalizer::default();
//!
//! // Recover a x10-misscaled reading
//! match normalizer.normalize(235.0) {
//!     Ok(v) => assert_eq!(v, 23.5),
//!     Err(e) => panic!("rejected: {:?}", e),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod constants;
pub mod errors;
pub mod healing;
pub mod normalize;
pub mod pipeline;
pub mod readiness;
pub mod telemetry;
pub mod time;
pub mod timer;
pub mod traits;

// Public API
pub use channel::Channel;
pub use errors::{NormalizeError, NormalizeResult};
pub use normalize::{
    Normalize,
    TemperatureNormalizer,
    HumidityNormalizer,
    PressureNormalizer,
};
pub use pipeline::{SamplePipeline, Snapshot, TickResult};
pub use readiness::{ReadinessGate, ReadinessState};
pub use traits::SensorBus;

/// Crate version string, for startup banners.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
