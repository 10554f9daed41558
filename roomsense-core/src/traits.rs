//! The sensor bus seam
//!
//! The acquisition loop talks to hardware through one small trait so the
//! same loop runs against a real driver stack on the device and against
//! scripted buses in tests. Keep it simple: pump, read, restart.

use crate::channel::Channel;

/// Capability surface of the sensor stack
///
/// Implementations own the hardware (or simulation) for all three
/// channels. Errors are bus-level faults; an implausible *reading* is
/// not an error here - it flows through normalization like any other
/// sample.
pub trait SensorBus {
    /// Bus-level fault type
    type Error;

    /// Start (subscribe) a channel's sample stream at the given rate
    fn begin(&mut self, channel: Channel, rate_hz: f32) -> Result<(), Self::Error>;

    /// Advance the bus state machine; called once per loop iteration
    /// before sampling
    fn pump(&mut self) -> Result<(), Self::Error>;

    /// Most recent raw scalar for a channel
    fn sample(&mut self, channel: Channel) -> f32;

    /// Re-issue the channel's begin/subscribe at its configured rate;
    /// the self-heal path for a stream stuck producing garbage
    fn restart(&mut self, channel: Channel) -> Result<(), Self::Error>;
}
