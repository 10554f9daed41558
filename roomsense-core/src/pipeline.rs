//! Per-tick sample processing
//!
//! [`SamplePipeline`] is the single owning context for all per-channel
//! acquisition state: the readiness gate, both self-healers, and each
//! channel's last-known-good value. One call to [`SamplePipeline::process`]
//! consumes one tick's normalized readings and returns everything the
//! control loop must act on as plain data - the one-shot ready
//! transition, the channels whose streams need a restart, and the
//! snapshot to publish (if the gate is open). The pipeline itself never
//! performs I/O.
//!
//! Substitution guarantee: once the gate is open, a channel whose sample
//! is invalid this tick publishes its last-known-good value instead.
//! The gate seeds last-known-good from the opening tick's samples, which
//! are valid by construction, so a post-ready channel can never surface
//! as missing - transient faults trade staleness for schema continuity.

use heapless::Vec;

use crate::{
    channel::Channel,
    healing::SelfHealer,
    readiness::{ReadinessGate, ReadinessState},
};

/// Validated (or substituted) values for one tick, ready for publication
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Temperature in Celsius; None only if the channel has never
    /// produced a valid reading (impossible once ready)
    pub temp_c: Option<f32>,
    /// Relative humidity in percent
    pub rh_pct: Option<f32>,
    /// Barometric pressure in hectopascal
    pub press_hpa: Option<f32>,
}

/// Everything the control loop must act on after one processed tick
#[derive(Debug, Clone)]
pub struct TickResult {
    /// True exactly once, on the tick the readiness gate opens
    pub became_ready: bool,
    /// Channels whose sensor streams should be restarted now
    pub restarts: Vec<Channel, { Channel::COUNT }>,
    /// Values to publish; None while warming up
    pub snapshot: Option<Snapshot>,
}

/// Owning context for gate, healers, and last-known-good state
#[derive(Debug)]
pub struct SamplePipeline {
    gate: ReadinessGate,
    warmup_healer: SelfHealer,
    runtime_healer: SelfHealer,
    last_good: [Option<f32>; Channel::COUNT],
}

impl SamplePipeline {
    /// Pipeline with the given gating and self-heal thresholds
    pub fn new(ready_threshold: u32, heal_threshold: u32) -> Self {
        Self {
            gate: ReadinessGate::new(ready_threshold),
            warmup_healer: SelfHealer::new(heal_threshold),
            runtime_healer: SelfHealer::new(heal_threshold),
            last_good: [None; Channel::COUNT],
        }
    }

    /// Process one tick of normalized readings, indexed by
    /// [`Channel::index`]. `None` marks an invalid sample.
    pub fn process(&mut self, readings: [Option<f32>; Channel::COUNT]) -> TickResult {
        let mut restarts = Vec::new();
        let mut became_ready = false;

        if self.gate.is_ready() {
            for ch in Channel::ALL {
                match readings[ch.index()] {
                    Some(value) => {
                        self.last_good[ch.index()] = Some(value);
                        self.runtime_healer.observe(ch, true);
                    }
                    None => {
                        if self.runtime_healer.observe(ch, false) {
                            let _ = restarts.push(ch);
                        }
                    }
                }
            }
        } else {
            for ch in Channel::ALL {
                let valid = readings[ch.index()].is_some();
                self.gate.record(ch, valid);
                if self.warmup_healer.observe(ch, valid) {
                    let _ = restarts.push(ch);
                }
            }
            if self.gate.check() {
                became_ready = true;
                // Seed last-known-good from the opening tick; every
                // channel is valid here by construction
                self.last_good = readings;
            }
        }

        let snapshot = self.gate.is_ready().then(|| Snapshot {
            temp_c: self.publishable(Channel::Temperature, &readings),
            rh_pct: self.publishable(Channel::Humidity, &readings),
            press_hpa: self.publishable(Channel::Pressure, &readings),
        });

        TickResult {
            became_ready,
            restarts,
            snapshot,
        }
    }

    /// Current publication state
    pub fn state(&self) -> ReadinessState {
        self.gate.state()
    }

    /// Whether the readiness gate has opened
    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    /// This tick's value for a channel: the fresh sample when valid,
    /// otherwise the last-known-good substitute
    fn publishable(
        &self,
        channel: Channel,
        readings: &[Option<f32>; Channel::COUNT],
    ) -> Option<f32> {
        readings[channel.index()].or(self.last_good[channel.index()])
    }
}
