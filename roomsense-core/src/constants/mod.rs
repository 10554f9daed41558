//! Constants for the RoomSense acquisition core
//!
//! Centralized numeric values with their source and rationale. Use these
//! instead of magic numbers; when adding new constants, document where
//! the value comes from (datasheet, deployment, observed fault).

/// Acceptance ranges and scale-correction parameters for normalization.
pub mod limits;

/// Startup gating and self-heal thresholds.
pub mod gating;

// Re-export commonly used constants for convenience
pub use limits::{
    TEMP_MIN_C, TEMP_MAX_C, TEMP_GLITCH_BAND_C,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    PRESSURE_MIN_HPA, PRESSURE_MAX_HPA, PRESSURE_PA_THRESHOLD,
};

pub use gating::{READINESS_THRESHOLD, SELF_HEAL_THRESHOLD};
