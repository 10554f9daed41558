//! Alive indicator
//!
//! The device blinks a status LED so someone standing next to it can
//! tell the loop is alive without a serial console. The seam is a trait
//! so desk builds and tests can substitute their own sink.

use tracing::trace;

/// Sink for the alive-indicator toggle
pub trait Indicator {
    /// Set the indicator state
    fn set(&mut self, on: bool);
}

/// Desk-build indicator: logs transitions at trace level
#[derive(Debug, Default)]
pub struct LogIndicator;

impl Indicator for LogIndicator {
    fn set(&mut self, on: bool) {
        trace!(on, "alive indicator");
    }
}
