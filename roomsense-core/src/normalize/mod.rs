//! Raw-reading normalization with candidate-scale recovery
//!
//! ## Why candidate probing?
//!
//! Sensor stacks occasionally emit misscaled or glitched values during
//! power transients: a x10 or x100 factor from a firmware unit mixup, a
//! Kelvin reading where Celsius was expected, Pascal where hectopascal
//! was expected, or a literal zero. Rather than diagnosing which fault
//! occurred, each normalizer tries a short list of plausible
//! interpretations of the raw scalar and accepts the first one that
//! lands inside the channel's physical acceptance range.
//!
//! Candidate order is a deliberate priority: the untransformed value is
//! always tried first, so an in-range reading passes through unchanged
//! and normalization is idempotent for already-normalized values.
//!
//! ## Contract
//!
//! `normalize(raw) -> Ok(value)` with the value inside the channel's
//! acceptance range, or `Err(NormalizeError)` when no interpretation is
//! plausible. Callers treat the error as "invalid this tick" - it never
//! propagates past the sample site.
//!
//! One module per channel, mirroring the per-sensor layout of the
//! validation ranges in [`crate::constants::limits`].

mod temperature;
mod humidity;
mod pressure;

pub use temperature::TemperatureNormalizer;
pub use humidity::HumidityNormalizer;
pub use pressure::PressureNormalizer;

use crate::errors::NormalizeResult;

/// Normalization of one channel's raw scalar into a validated physical
/// value. Implementations are pure: no I/O, no internal state.
pub trait Normalize {
    /// Map a raw sensor scalar to a validated physical value, trying
    /// plausible scale/offset corrections before giving up.
    fn normalize(&self, raw: f32) -> NormalizeResult<f32>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn accepted_temperatures_stay_in_band(raw in -1000.0f32..1000.0) {
            let n = TemperatureNormalizer::default();
            if let Ok(v) = n.normalize(raw) {
                prop_assert!(v > -40.0 && v < 85.0);
                prop_assert!(v.abs() >= 0.5);
            }
        }

        #[test]
        fn accepted_humidity_stays_in_band(raw in -1000.0f32..100_000.0) {
            let n = HumidityNormalizer::default();
            if let Ok(v) = n.normalize(raw) {
                prop_assert!((0.5..=100.0).contains(&v));
            }
        }

        #[test]
        fn accepted_pressure_stays_in_band(raw in -1000.0f32..200_000.0) {
            let n = PressureNormalizer::default();
            if let Ok(v) = n.normalize(raw) {
                prop_assert!((300.0..=1100.0).contains(&v));
            }
        }

        #[test]
        fn in_band_values_pass_through_unchanged(raw in 1.0f32..84.0) {
            // Idempotence: normalizing an already-normalized value is a no-op
            let n = TemperatureNormalizer::default();
            prop_assert_eq!(n.normalize(raw), Ok(raw));
        }
    }
}
