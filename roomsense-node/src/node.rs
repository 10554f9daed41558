//! The acquisition control loop
//!
//! One [`SensorNode::tick`] per loop iteration, in a fixed order:
//! connectivity maintenance, protocol pump, sensor bus pump, one clock
//! read, timer checks, sampling and normalization, gating/healing, and
//! the conditional publishes. Sampling runs every iteration regardless
//! of publish cadence, so a telemetry publish always carries the most
//! recent sample rather than one taken at the publish boundary.
//!
//! Everything the loop touches sits behind a seam ([`SensorBus`],
//! [`Transport`], [`TimeSource`], [`Indicator`]), so the identical loop
//! drives real hardware and scripted test doubles.

use std::fmt;
use std::thread;
use std::time::Duration;

use roomsense_core::{
    channel::Channel,
    normalize::{HumidityNormalizer, Normalize, PressureNormalizer, TemperatureNormalizer},
    pipeline::SamplePipeline,
    readiness::ReadinessState,
    time::TimeSource,
    timer::IntervalTimer,
    traits::SensorBus,
};
use tracing::{debug, info, warn};

use crate::config;
use crate::indicator::Indicator;
use crate::publisher::Publisher;
use crate::transport::{SessionEvent, Transport};

/// Loop cadences and thresholds, defaulting to the compile-time config
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Consecutive valid samples per channel before telemetry starts
    pub ready_threshold: u32,
    /// Consecutive invalid samples that trigger a stream restart
    pub heal_threshold: u32,
    /// Telemetry publish interval in milliseconds
    pub telemetry_interval_ms: u64,
    /// Heartbeat publish interval in milliseconds
    pub heartbeat_interval_ms: u64,
    /// Alive-indicator toggle interval in milliseconds
    pub alive_toggle_ms: u64,
    /// Sensor poll rate in hertz; also the loop cadence
    pub sensor_rate_hz: f32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            ready_threshold: config::READINESS_THRESHOLD,
            heal_threshold: config::SELF_HEAL_THRESHOLD,
            telemetry_interval_ms: config::TELEMETRY_INTERVAL_MS,
            heartbeat_interval_ms: config::HEARTBEAT_INTERVAL_MS,
            alive_toggle_ms: config::ALIVE_TOGGLE_MS,
            sensor_rate_hz: config::SENSOR_RATE_HZ,
        }
    }
}

/// The sensor node: owns every collaborator and runs the loop
pub struct SensorNode<B, T, C, I> {
    bus: B,
    transport: T,
    clock: C,
    indicator: I,
    publisher: Publisher,
    pipeline: SamplePipeline,
    temperature: TemperatureNormalizer,
    humidity: HumidityNormalizer,
    pressure: PressureNormalizer,
    heartbeat: IntervalTimer,
    telemetry: IntervalTimer,
    alive: IntervalTimer,
    alive_on: bool,
    poll_interval: Duration,
}

impl<B, T, C, I> SensorNode<B, T, C, I>
where
    B: SensorBus,
    B::Error: fmt::Display,
    T: Transport,
    C: TimeSource,
    I: Indicator,
{
    /// Build the node and start all three sensor streams
    pub fn new(
        mut bus: B,
        transport: T,
        clock: C,
        indicator: I,
        device_id: &str,
        cfg: NodeConfig,
    ) -> Result<Self, B::Error> {
        for ch in Channel::ALL {
            bus.begin(ch, cfg.sensor_rate_hz)?;
        }

        let now = clock.now();
        Ok(Self {
            bus,
            transport,
            clock,
            indicator,
            publisher: Publisher::new(device_id),
            pipeline: SamplePipeline::new(cfg.ready_threshold, cfg.heal_threshold),
            temperature: TemperatureNormalizer::default(),
            humidity: HumidityNormalizer::default(),
            pressure: PressureNormalizer::default(),
            heartbeat: IntervalTimer::new(cfg.heartbeat_interval_ms, now),
            telemetry: IntervalTimer::new(cfg.telemetry_interval_ms, now),
            alive: IntervalTimer::new(cfg.alive_toggle_ms, now),
            alive_on: false,
            poll_interval: Duration::from_secs_f32(1.0 / cfg.sensor_rate_hz),
        })
    }

    /// One loop iteration
    pub fn tick(&mut self) {
        // Connectivity and session upkeep; blocks while disconnected.
        // A fresh session needs the retained status refreshed so
        // late-joining observers learn the device state.
        if self.transport.maintain() == SessionEvent::Established {
            if let Err(e) = self
                .publisher
                .status(&mut self.transport, self.pipeline.state())
            {
                warn!("status publish failed: {e}");
            }
        }
        self.transport.pump();

        if let Err(e) = self.bus.pump() {
            warn!("sensor bus pump failed: {e}");
        }

        // One clock read per iteration; everything below shares it
        let now = self.clock.now();
        let heartbeat_due = self.heartbeat.fire(now);
        let telemetry_due = self.telemetry.fire(now);
        let alive_due = self.alive.fire(now);

        let readings = [
            self.normalized(Channel::Temperature),
            self.normalized(Channel::Humidity),
            self.normalized(Channel::Pressure),
        ];

        let result = self.pipeline.process(readings);

        for ch in &result.restarts {
            warn!(channel = ch.name(), "restarting stream after repeated invalid samples");
            if let Err(e) = self.bus.restart(*ch) {
                warn!(channel = ch.name(), "stream restart failed: {e}");
            }
        }

        if result.became_ready {
            info!("all channels stable, telemetry gate open");
            if let Err(e) = self
                .publisher
                .status(&mut self.transport, ReadinessState::Ready)
            {
                warn!("status publish failed: {e}");
            }
        }

        if alive_due {
            self.alive_on = !self.alive_on;
            self.indicator.set(self.alive_on);
        }

        if heartbeat_due {
            if let Err(e) = self.publisher.heartbeat(&mut self.transport, now) {
                warn!("heartbeat publish failed: {e}");
            }
        }

        if telemetry_due {
            if let Some(snapshot) = result.snapshot {
                if let Err(e) = self.publisher.data(&mut self.transport, &snapshot, now) {
                    warn!("data publish failed: {e}");
                }
            }
        }
    }

    /// Run the loop at the configured poll cadence, forever
    pub fn run(&mut self) -> ! {
        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "entering acquisition loop"
        );
        loop {
            self.tick();
            thread::sleep(self.poll_interval);
        }
    }

    /// Sample one channel and fold normalization failure into "invalid
    /// this tick"
    fn normalized(&mut self, channel: Channel) -> Option<f32> {
        let raw = self.bus.sample(channel);
        let outcome = match channel {
            Channel::Temperature => self.temperature.normalize(raw),
            Channel::Humidity => self.humidity.normalize(raw),
            Channel::Pressure => self.pressure.normalize(raw),
        };
        match outcome {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(channel = channel.name(), raw = %raw, "sample rejected: {e}");
                None
            }
        }
    }
}
