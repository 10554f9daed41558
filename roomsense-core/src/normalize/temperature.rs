//! Temperature normalization
//!
//! Faults this recovers from, in candidate order:
//! - in-range reading: passes through unchanged
//! - x10 / x100 misscale: integer-centi/deci-degree firmware mixups
//! - Kelvin reading: stack configured for the wrong output unit
//!
//! The literal zero (and near-zero values after a scale correction) is a
//! known glitch signature on this stack during power transients, not a
//! plausible indoor reading, so it is rejected outright.

use crate::{
    constants::limits::{
        KELVIN_OFFSET, TEMP_GLITCH_BAND_C, TEMP_MAX_C, TEMP_MIN_C, ZERO_TOLERANCE,
    },
    errors::{NormalizeError, NormalizeResult},
};

use super::Normalize;

/// Temperature normalizer for Celsius readings
#[derive(Debug, Clone)]
pub struct TemperatureNormalizer {
    /// Lower acceptance bound in Celsius, exclusive
    min_c: f32,

    /// Upper acceptance bound in Celsius, exclusive
    max_c: f32,
}

impl Default for TemperatureNormalizer {
    fn default() -> Self {
        Self {
            min_c: TEMP_MIN_C,
            max_c: TEMP_MAX_C,
        }
    }
}

impl TemperatureNormalizer {
    /// Normalizer with custom acceptance bounds (exclusive on both ends)
    pub fn with_bounds(min_c: f32, max_c: f32) -> Self {
        let (min_c, max_c) = if min_c > max_c { (max_c, min_c) } else { (min_c, max_c) };
        Self { min_c, max_c }
    }
}

impl Normalize for TemperatureNormalizer {
    fn normalize(&self, raw: f32) -> NormalizeResult<f32> {
        if !raw.is_finite() {
            return Err(NormalizeError::NotFinite);
        }

        // Literal zero is the glitch signature regardless of scale
        if libm::fabsf(raw) < ZERO_TOLERANCE {
            return Err(NormalizeError::ZeroGlitch { raw });
        }

        // Untransformed first, then the known misscale corrections
        let candidates = [raw, raw / 10.0, raw / 100.0, raw - KELVIN_OFFSET];
        for candidate in candidates {
            if candidate > self.min_c && candidate < self.max_c {
                // A near-zero survivor of a scale correction is the same
                // glitch in disguise
                if libm::fabsf(candidate) < TEMP_GLITCH_BAND_C {
                    return Err(NormalizeError::ZeroGlitch { raw });
                }
                return Ok(candidate);
            }
        }

        Err(NormalizeError::OutOfRange { raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_passes_through() {
        let n = TemperatureNormalizer::default();
        assert_eq!(n.normalize(23.5), Ok(23.5));
        assert_eq!(n.normalize(-10.0), Ok(-10.0));
    }

    #[test]
    fn zero_glitch_rejected_at_every_scale() {
        let n = TemperatureNormalizer::default();
        for raw in [0.0, 0.3, -0.3] {
            assert!(
                matches!(n.normalize(raw), Err(NormalizeError::ZeroGlitch { .. })),
                "raw {raw} should be rejected as a glitch"
            );
        }
    }

    #[test]
    fn x10_misscale_recovered() {
        let n = TemperatureNormalizer::default();
        assert_eq!(n.normalize(235.0), Ok(23.5));
    }

    #[test]
    fn x100_misscale_recovered() {
        let n = TemperatureNormalizer::default();
        assert_eq!(n.normalize(2350.0), Ok(23.5));
    }

    #[test]
    fn earlier_candidates_take_priority() {
        // 296.65 could be Kelvin (23.5 C) but /10 also lands in range;
        // the fixed candidate order picks /10
        let n = TemperatureNormalizer::default();
        let v = n.normalize(296.65).unwrap();
        assert!((v - 29.665).abs() < 1e-3);
    }

    #[test]
    fn hopeless_raw_rejected() {
        let n = TemperatureNormalizer::default();
        assert!(matches!(
            n.normalize(1e9),
            Err(NormalizeError::OutOfRange { .. })
        ));
        assert_eq!(n.normalize(f32::NAN), Err(NormalizeError::NotFinite));
        assert_eq!(n.normalize(f32::INFINITY), Err(NormalizeError::NotFinite));
    }
}
