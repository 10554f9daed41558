//! Simulated sensor bus
//!
//! Deterministic stand-in for the hardware driver stack: slow waveforms
//! around plausible indoor values, plus the fault signatures the
//! normalizer exists for - the literal-zero temperature glitch, x10
//! misscales, and pressure reported in Pascal the way the raw driver
//! delivers it. Lets the binary run on a desk against a real broker and
//! gives tests a bus with known behavior.

use std::convert::Infallible;

use roomsense_core::{channel::Channel, traits::SensorBus};

/// Ticks between injected zero-glitches on the temperature channel
const TEMP_GLITCH_EVERY: u64 = 97;

/// Ticks between injected x10 misscales on the temperature channel
const TEMP_MISSCALE_EVERY: u64 = 131;

/// Ticks between injected x10 misscales on the humidity channel
const HUMIDITY_MISSCALE_EVERY: u64 = 113;

/// Deterministic simulated bus
#[derive(Debug, Default)]
pub struct SimulatedBus {
    ticks: u64,
    rates: [Option<f32>; Channel::COUNT],
    restarts: [u32; Channel::COUNT],
}

impl SimulatedBus {
    /// Fresh bus; streams start on `begin`
    pub fn new() -> Self {
        Self::default()
    }

    /// How often a channel's stream has been restarted
    pub fn restart_count(&self, channel: Channel) -> u32 {
        self.restarts[channel.index()]
    }
}

impl SensorBus for SimulatedBus {
    type Error = Infallible;

    fn begin(&mut self, channel: Channel, rate_hz: f32) -> Result<(), Self::Error> {
        self.rates[channel.index()] = Some(rate_hz);
        Ok(())
    }

    fn pump(&mut self) -> Result<(), Self::Error> {
        self.ticks += 1;
        Ok(())
    }

    fn sample(&mut self, channel: Channel) -> f32 {
        let t = self.ticks as f32;
        match channel {
            Channel::Temperature => {
                if self.ticks % TEMP_GLITCH_EVERY == 0 {
                    return 0.0;
                }
                let v = 21.5 + 1.5 * (t * 0.05).sin();
                if self.ticks % TEMP_MISSCALE_EVERY == 0 {
                    v * 10.0
                } else {
                    v
                }
            }
            Channel::Humidity => {
                let v = 45.0 + 6.0 * (t * 0.03).sin();
                if self.ticks % HUMIDITY_MISSCALE_EVERY == 0 {
                    v * 10.0
                } else {
                    v
                }
            }
            // The raw driver reports Pascal; unit correction is the
            // normalizer's job
            Channel::Pressure => 98_900.0 + 40.0 * (t * 0.01).sin(),
        }
    }

    fn restart(&mut self, channel: Channel) -> Result<(), Self::Error> {
        self.restarts[channel.index()] += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glitches_are_deterministic() {
        let mut bus = SimulatedBus::new();
        for _ in 0..TEMP_GLITCH_EVERY {
            bus.pump().unwrap();
        }
        assert_eq!(bus.sample(Channel::Temperature), 0.0);
    }

    #[test]
    fn pressure_is_reported_in_pascal() {
        let mut bus = SimulatedBus::new();
        bus.pump().unwrap();
        let raw = bus.sample(Channel::Pressure);
        assert!(raw > 90_000.0 && raw < 110_000.0);
    }

    #[test]
    fn restart_counts_per_channel() {
        let mut bus = SimulatedBus::new();
        bus.restart(Channel::Humidity).unwrap();
        bus.restart(Channel::Humidity).unwrap();
        assert_eq!(bus.restart_count(Channel::Humidity), 2);
        assert_eq!(bus.restart_count(Channel::Temperature), 0);
    }
}
