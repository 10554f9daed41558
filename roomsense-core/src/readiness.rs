//! Gated startup
//!
//! The node publishes no telemetry until every channel has proven itself
//! with a run of consecutive valid samples. Streaks are tracked per
//! channel and reset to zero by a single invalid sample, so readiness
//! requires all three channels to be stable *at the same time* - a
//! channel can reach the threshold and regress while the others catch
//! up. Once the gate opens it never closes again; later faults are
//! handled by substitution, not by re-gating.

use crate::channel::Channel;

/// Publication state of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    /// Channels are still proving stability; nothing is published
    WarmingUp,
    /// All channels reached the streak threshold; telemetry flows
    Ready,
}

impl ReadinessState {
    /// Wire representation, published on the retained status topic
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReadinessState::WarmingUp => "warming_up",
            ReadinessState::Ready => "ready",
        }
    }
}

/// Per-channel consecutive-valid streak tracking and the one-shot
/// WarmingUp -> Ready transition
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    threshold: u32,
    streaks: [u32; Channel::COUNT],
    state: ReadinessState,
}

impl ReadinessGate {
    /// Gate requiring `threshold` consecutive valid samples per channel
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            streaks: [0; Channel::COUNT],
            state: ReadinessState::WarmingUp,
        }
    }

    /// Record one sample outcome for a channel. Invalid resets the
    /// channel's streak; valid extends it. No effect once ready.
    pub fn record(&mut self, channel: Channel, valid: bool) {
        if self.state == ReadinessState::Ready {
            return;
        }
        let streak = &mut self.streaks[channel.index()];
        *streak = if valid { streak.saturating_add(1) } else { 0 };
    }

    /// Check the gate after recording the tick's samples. Returns true
    /// exactly once, on the tick the gate opens.
    pub fn check(&mut self) -> bool {
        if self.state == ReadinessState::Ready {
            return false;
        }
        if self.streaks.iter().all(|s| *s >= self.threshold) {
            self.state = ReadinessState::Ready;
            #[cfg(feature = "log")]
            log::info!("readiness gate open");
            return true;
        }
        false
    }

    /// Current publication state
    pub fn state(&self) -> ReadinessState {
        self.state
    }

    /// Whether the gate has opened
    pub fn is_ready(&self) -> bool {
        self.state == ReadinessState::Ready
    }

    /// Current streak for a channel, for diagnostics
    pub fn streak(&self, channel: Channel) -> u32 {
        self.streaks[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(gate: &mut ReadinessGate, valid: bool) {
        for ch in Channel::ALL {
            gate.record(ch, valid);
        }
    }

    #[test]
    fn opens_only_after_consecutive_run() {
        // valid,valid,invalid,valid,valid,valid,valid,valid with
        // threshold 5: the invalid at sample 3 resets the streak, so the
        // gate opens at sample 8, not at the 5th valid overall
        let sequence = [true, true, false, true, true, true, true, true];
        let mut gate = ReadinessGate::new(5);
        let mut opened_at = None;

        for (i, valid) in sequence.iter().enumerate() {
            record_all(&mut gate, *valid);
            if gate.check() {
                opened_at = Some(i + 1);
            }
        }

        assert_eq!(opened_at, Some(8));
    }

    #[test]
    fn requires_simultaneity_across_channels() {
        let mut gate = ReadinessGate::new(3);

        // Temperature races ahead, then regresses while the others build
        for _ in 0..4 {
            gate.record(Channel::Temperature, true);
        }
        gate.record(Channel::Temperature, false);
        assert_eq!(gate.streak(Channel::Temperature), 0);

        for _ in 0..3 {
            record_all(&mut gate, true);
        }
        assert!(gate.check());
        assert!(gate.is_ready());
    }

    #[test]
    fn transition_fires_once_and_never_reverts() {
        let mut gate = ReadinessGate::new(2);
        for _ in 0..2 {
            record_all(&mut gate, true);
        }
        assert!(gate.check());
        assert!(!gate.check());

        // Invalid samples after the gate opened do not re-gate
        record_all(&mut gate, false);
        assert!(gate.is_ready());
        assert!(!gate.check());
    }

    #[test]
    fn wire_strings() {
        assert_eq!(ReadinessState::WarmingUp.as_str(), "warming_up");
        assert_eq!(ReadinessState::Ready.as_str(), "ready");
    }
}
