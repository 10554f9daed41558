//! Error types for rejected sensor readings
//!
//! A rejected reading is an expected, non-fatal event: the loop folds it
//! into a gating delay (pre-ready) or a substitution (post-ready), so the
//! error type is built to be cheap to return and cheap to drop:
//!
//! 1. **Copy semantics**: errors are returned on every sample tick and
//!    never outlive the tick that produced them.
//! 2. **No heap allocation**: payloads are inline `f32`s, messages are
//!    static. Memory usage is deterministic.
//! 3. **Actionable variants**: each variant maps to one fault signature
//!    seen on real sensor stacks, so log output names the fault directly.

use thiserror_no_std::Error;

/// Result type for normalization operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Why a raw reading was rejected - kept small, one variant per fault class
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NormalizeError {
    /// Mathematically invalid input (NaN, infinity)
    #[error("Not a finite number")]
    NotFinite,

    /// The literal-zero glitch some sensor stacks emit during power
    /// transients, either undisguised or surviving a scale correction
    #[error("Zero-glitch signature in raw value {raw}")]
    ZeroGlitch {
        /// The raw scalar that carried the glitch signature
        raw: f32,
    },

    /// No candidate interpretation landed inside the plausible range
    #[error("No plausible interpretation of raw value {raw}")]
    OutOfRange {
        /// The raw scalar that could not be recovered
        raw: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for NormalizeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotFinite =>
                defmt::write!(fmt, "not a finite number"),
            Self::ZeroGlitch { raw } =>
                defmt::write!(fmt, "zero-glitch in raw {}", raw),
            Self::OutOfRange { raw } =>
                defmt::write!(fmt, "no plausible interpretation of {}", raw),
        }
    }
}
