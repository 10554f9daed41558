//! Acceptance ranges and scale-correction parameters
//!
//! The ranges follow the operating envelope of the BME-class environmental
//! sensors the node was built around; anything outside them is a fault,
//! not weather.

/// Tolerance for "raw value is exactly zero" - the glitch signature the
/// sensor stack emits during power transients.
pub const ZERO_TOLERANCE: f32 = 1e-6;

/// Lower temperature acceptance bound in Celsius (exclusive).
/// Sensor operating minimum; colder readings are misscaled or garbage.
pub const TEMP_MIN_C: f32 = -40.0;

/// Upper temperature acceptance bound in Celsius (exclusive).
/// Sensor operating maximum.
pub const TEMP_MAX_C: f32 = 85.0;

/// Accepted temperatures closer to zero than this are treated as a
/// disguised zero-glitch that slipped through a scale correction.
pub const TEMP_GLITCH_BAND_C: f32 = 0.5;

/// Offset between Kelvin and Celsius, for sensors reporting Kelvin.
pub const KELVIN_OFFSET: f32 = 273.15;

/// Lower humidity acceptance bound in percent (inclusive).
/// True 0% RH does not occur indoors; values below this are glitches.
pub const HUMIDITY_MIN_PCT: f32 = 0.5;

/// Upper humidity acceptance bound in percent (inclusive).
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

/// Lower pressure acceptance bound in hectopascal (inclusive).
/// Below any recorded storm, even at altitude.
pub const PRESSURE_MIN_HPA: f32 = 300.0;

/// Upper pressure acceptance bound in hectopascal (inclusive).
/// Above the highest recorded sea-level pressure.
pub const PRESSURE_MAX_HPA: f32 = 1100.0;

/// Raw pressure readings above this are taken to be Pascal and divided
/// by [`PA_PER_HPA`]. No plausible hPa reading exceeds it.
pub const PRESSURE_PA_THRESHOLD: f32 = 2000.0;

/// Pascals per hectopascal.
pub const PA_PER_HPA: f32 = 100.0;
