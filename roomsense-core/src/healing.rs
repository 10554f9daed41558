//! Per-channel self-healing
//!
//! A channel that goes invalid for a run of consecutive samples gets its
//! sensor stream restarted. The healer only decides *when* to restart;
//! the restart itself is executed by the caller through
//! [`SensorBus::restart`], so the logic stays data-driven over channels
//! instead of being duplicated per sensor.
//!
//! The control loop holds two healers with separate counters: one for
//! the warm-up phase and one for post-ready operation. The mechanism is
//! identical; only the surrounding handling of the sample differs
//! (gating delay vs. last-known-good substitution).
//!
//! [`SensorBus::restart`]: crate::traits::SensorBus::restart

use crate::channel::Channel;

/// Consecutive-invalid streak tracking with a restart threshold
#[derive(Debug, Clone)]
pub struct SelfHealer {
    threshold: u32,
    streaks: [u32; Channel::COUNT],
}

impl SelfHealer {
    /// Healer that requests a restart after `threshold` consecutive
    /// invalid samples on a channel
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            streaks: [0; Channel::COUNT],
        }
    }

    /// Record one sample outcome. Returns true when the channel's stream
    /// should be restarted; the streak resets alongside, so a persistent
    /// fault yields one restart per threshold-length run.
    pub fn observe(&mut self, channel: Channel, valid: bool) -> bool {
        let streak = &mut self.streaks[channel.index()];
        if valid {
            *streak = 0;
            return false;
        }

        *streak += 1;
        if *streak >= self.threshold {
            *streak = 0;
            #[cfg(feature = "log")]
            log::warn!("{} stuck invalid, requesting stream restart", channel.name());
            return true;
        }
        false
    }

    /// Current invalid streak for a channel, for diagnostics
    pub fn streak(&self, channel: Channel) -> u32 {
        self.streaks[channel.index()]
    }
}
