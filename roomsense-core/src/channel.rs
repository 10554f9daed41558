//! Measurement channels
//!
//! One `Channel` per physical measurement stream. Per-channel state is
//! held in arrays indexed by [`Channel::index`] inside the owning
//! pipeline - no free-floating statics.

/// One physical measurement stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    /// Air temperature, degrees Celsius
    Temperature = 0,
    /// Relative humidity, percent
    Humidity = 1,
    /// Barometric pressure, hectopascal
    Pressure = 2,
}

impl Channel {
    /// Number of channels the node acquires
    pub const COUNT: usize = 3;

    /// All channels in processing order
    pub const ALL: [Channel; Channel::COUNT] = [
        Channel::Temperature,
        Channel::Humidity,
        Channel::Pressure,
    ];

    /// Human-readable name, used in log lines
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::Humidity => "humidity",
            Channel::Pressure => "pressure",
        }
    }

    /// Stable index into per-channel state arrays
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    #[test]
    fn names_are_distinct() {
        assert_ne!(Channel::Temperature.name(), Channel::Humidity.name());
        assert_ne!(Channel::Humidity.name(), Channel::Pressure.name());
    }
}
