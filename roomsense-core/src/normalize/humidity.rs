//! Relative humidity normalization
//!
//! Candidates cover the misscales seen on this stack: deci-percent and
//! centi-percent integer encodings, and a 0..1 fraction where percent
//! was expected (hence the x100 candidate last).

use crate::{
    constants::limits::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
    errors::{NormalizeError, NormalizeResult},
};

use super::Normalize;

/// Humidity normalizer for percent readings
#[derive(Debug, Clone)]
pub struct HumidityNormalizer {
    /// Lower acceptance bound in percent, inclusive
    min_pct: f32,

    /// Upper acceptance bound in percent, inclusive
    max_pct: f32,
}

impl Default for HumidityNormalizer {
    fn default() -> Self {
        Self {
            min_pct: HUMIDITY_MIN_PCT,
            max_pct: HUMIDITY_MAX_PCT,
        }
    }
}

impl Normalize for HumidityNormalizer {
    fn normalize(&self, raw: f32) -> NormalizeResult<f32> {
        if !raw.is_finite() {
            return Err(NormalizeError::NotFinite);
        }

        let candidates = [raw, raw / 10.0, raw / 100.0, raw * 100.0];
        for candidate in candidates {
            if candidate >= self.min_pct && candidate <= self.max_pct {
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
        let n = HumidityNormalizer::default();
        assert_eq!(n.normalize(45.0), Ok(45.0));
        assert_eq!(n.normalize(100.0), Ok(100.0));
    }

    #[test]
    fn untransformed_wins_over_corrections() {
        // 4.5 is inside [0.5, 100] as-is, so no correction is applied
        // even though x10 would give a "nicer" mid-range value
        let n = HumidityNormalizer::default();
        assert_eq!(n.normalize(4.5), Ok(4.5));
    }

    #[test]
    fn x10_misscale_recovered() {
        let n = HumidityNormalizer::default();
        assert_eq!(n.normalize(450.0), Ok(45.0));
    }

    #[test]
    fn x100_misscale_recovered() {
        let n = HumidityNormalizer::default();
        assert_eq!(n.normalize(4500.0), Ok(45.0));
    }

    #[test]
    fn fraction_recovered() {
        // 0..1 fraction where percent was expected
        let n = HumidityNormalizer::default();
        assert_eq!(n.normalize(0.45), Ok(45.0));
    }

    #[test]
    fn hopeless_raw_rejected() {
        let n = HumidityNormalizer::default();
        assert!(matches!(
            n.normalize(-5.0),
            Err(NormalizeError::OutOfRange { .. })
        ));
        assert_eq!(n.normalize(f32::NAN), Err(NormalizeError::NotFinite));
    }
}
