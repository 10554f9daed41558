//! Startup gating and self-heal thresholds

/// Consecutive valid samples each channel must produce before the node
/// starts publishing telemetry.
pub const READINESS_THRESHOLD: u32 = 5;

/// Consecutive invalid samples on one channel that trigger a restart of
/// that channel's sensor stream. Applies both during warm-up and after
/// the readiness gate has opened (separate counters).
pub const SELF_HEAL_THRESHOLD: u32 = 5;
