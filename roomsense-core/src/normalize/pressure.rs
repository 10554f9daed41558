//! Barometric pressure normalization
//!
//! The only correction here is the Pa-for-hPa unit mixup: raw values
//! above [`PRESSURE_PA_THRESHOLD`] cannot be hectopascal readings and
//! are divided down. Zero and negative readings carry no information
//! about air pressure and are rejected before any correction.
//!
//! [`PRESSURE_PA_THRESHOLD`]: crate::constants::limits::PRESSURE_PA_THRESHOLD

use crate::{
    constants::limits::{PA_PER_HPA, PRESSURE_MAX_HPA, PRESSURE_MIN_HPA, PRESSURE_PA_THRESHOLD},
    errors::{NormalizeError, NormalizeResult},
};

use super::Normalize;

/// Pressure normalizer for hectopascal readings
#[derive(Debug, Clone)]
pub struct PressureNormalizer {
    /// Lower acceptance bound in hPa, inclusive
    min_hpa: f32,

    /// Upper acceptance bound in hPa, inclusive
    max_hpa: f32,
}

impl Default for PressureNormalizer {
    fn default() -> Self {
        Self {
            min_hpa: PRESSURE_MIN_HPA,
            max_hpa: PRESSURE_MAX_HPA,
        }
    }
}

impl Normalize for PressureNormalizer {
    fn normalize(&self, raw: f32) -> NormalizeResult<f32> {
        if !raw.is_finite() {
            return Err(NormalizeError::NotFinite);
        }

        if raw <= 0.0 {
            return Err(NormalizeError::OutOfRange { raw });
        }

        // Pa-for-hPa unit mixup
        let hpa = if raw > PRESSURE_PA_THRESHOLD {
            raw / PA_PER_HPA
        } else {
            raw
        };

        if hpa >= self.min_hpa && hpa <= self.max_hpa {
            Ok(hpa)
        } else {
            Err(NormalizeError::OutOfRange { raw })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_passes_through() {
        let n = PressureNormalizer::default();
        assert_eq!(n.normalize(985.0), Ok(985.0));
        assert_eq!(n.normalize(1013.25), Ok(1013.25));
    }

    #[test]
    fn pascal_reading_converted() {
        let n = PressureNormalizer::default();
        assert_eq!(n.normalize(98500.0), Ok(985.0));
    }

    #[test]
    fn nonpositive_rejected() {
        let n = PressureNormalizer::default();
        for raw in [0.0, -10.0] {
            assert!(matches!(
                n.normalize(raw),
                Err(NormalizeError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn out_of_band_rejected_even_after_conversion() {
        let n = PressureNormalizer::default();
        // 20000 Pa = 200 hPa, below any plausible surface pressure
        assert!(n.normalize(20_000.0).is_err());
        // 1500 is neither a plausible hPa value nor above the Pa threshold
        assert!(n.normalize(1500.0).is_err());
        assert_eq!(n.normalize(f32::NEG_INFINITY), Err(NormalizeError::NotFinite));
    }
}
