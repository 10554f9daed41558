//! Broker connectivity
//!
//! Two-layer connection, checked every loop iteration:
//!
//! - **link**: the broker address is reachable at TCP level. On the
//!   device this is the radio association; on a desk build a plain
//!   connect probe stands in for it.
//! - **session**: an MQTT session on top of the link, up once the
//!   broker's ConnAck arrives.
//!
//! Either layer dropping blocks the whole node in a retry loop until it
//! comes back - the device has no other useful work while disconnected.
//! The wait between attempts comes from a [`RetryPolicy`] object so the
//! fixed interval can be swapped for exponential backoff without
//! touching callers.

use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use rumqttc::{Client, ConnectReturnCode, Connection, Event, MqttOptions, Packet, QoS};
use thiserror::Error;
use tracing::{info, trace, warn};

/// How long to wait for the broker's ConnAck before retrying
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-call budget for draining pending protocol events
const PUMP_TIMEOUT: Duration = Duration::from_millis(5);

/// Upper bound on events drained per pump, so a chatty broker cannot
/// stall the sample cadence
const MAX_PUMP_EVENTS: usize = 32;

/// Transport-layer failures surfaced to publish call sites
#[derive(Debug, Error)]
pub enum TransportError {
    /// Publish attempted without an established session
    #[error("session not established")]
    NotConnected,

    /// The client rejected the publish; the session is torn down and
    /// rebuilt by the next maintain call
    #[error("publish failed: {0}")]
    Publish(#[from] rumqttc::ClientError),
}

/// Outcome of a maintain call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Both layers were already up; nothing happened
    Unchanged,
    /// The session was (re)established during this call; the caller
    /// should refresh the retained status topic
    Established,
}

/// Wait policy for blocking reconnects: fixed interval, unbounded
/// attempts
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    delay: Duration,
}

impl RetryPolicy {
    /// Policy that waits the same `delay` before every attempt
    pub const fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    /// Delay to wait before the next attempt
    pub fn next_delay(&mut self) -> Duration {
        self.delay
    }

    /// Notify the policy that a connection attempt succeeded
    pub fn reset(&mut self) {}
}

/// Connectivity seam for the control loop
///
/// The loop only ever maintains, pumps, and publishes; connection state
/// is owned by the implementation and never mutated from outside.
pub trait Transport {
    /// Bring both layers up, blocking through retries until they are.
    /// Returns whether a new session was established in the process.
    fn maintain(&mut self) -> SessionEvent;

    /// Queue a message on the session
    fn publish(
        &mut self,
        topic: &str,
        payload: &[u8],
        qos: QoS,
        retain: bool,
    ) -> Result<(), TransportError>;

    /// Drive protocol I/O (acks, pings, inbound traffic); a connection
    /// error here marks the session down for the next maintain
    fn pump(&mut self);

    /// Whether both layers are currently up
    fn is_connected(&self) -> bool;
}

/// MQTT transport over rumqttc's synchronous client
pub struct MqttTransport {
    host: String,
    port: u16,
    client_id: String,
    keepalive: Duration,
    retry: RetryPolicy,
    client: Option<Client>,
    connection: Option<Connection>,
    link_up: bool,
    session_up: bool,
}

impl MqttTransport {
    /// Transport for the given broker; nothing connects until the first
    /// maintain call
    pub fn new(
        host: impl Into<String>,
        port: u16,
        client_id: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            client_id: client_id.into(),
            keepalive: Duration::from_secs(30),
            retry,
            client: None,
            connection: None,
            link_up: false,
            session_up: false,
        }
    }

    /// Override the MQTT keep-alive interval
    pub fn with_keepalive(mut self, keepalive: Duration) -> Self {
        self.keepalive = keepalive;
        self
    }

    /// One MQTT connect attempt: build a fresh client and wait for the
    /// broker handshake
    fn open_session(&mut self) -> bool {
        let mut options = MqttOptions::new(self.client_id.clone(), self.host.clone(), self.port);
        options.set_keep_alive(self.keepalive);
        options.set_clean_session(true);

        let (client, mut connection) = Client::new(options, 16);

        loop {
            match connection.recv_timeout(CONNECT_TIMEOUT) {
                Ok(Ok(Event::Incoming(Packet::ConnAck(ack)))) => {
                    if ack.code == ConnectReturnCode::Success {
                        info!(client_id = %self.client_id, "mqtt session established");
                        self.client = Some(client);
                        self.connection = Some(connection);
                        return true;
                    }
                    warn!(code = ?ack.code, "broker refused session");
                    return false;
                }
                Ok(Ok(event)) => {
                    trace!(?event, "pre-session event");
                }
                Ok(Err(e)) => {
                    warn!("mqtt connect failed: {e}");
                    return false;
                }
                Err(_) => {
                    warn!("mqtt connect timed out");
                    return false;
                }
            }
        }
    }

    /// Tear down the session; a connection-level fault may have taken
    /// the link with it, so both layers get re-proven
    fn drop_session(&mut self) {
        self.client = None;
        self.connection = None;
        self.session_up = false;
        self.link_up = false;
    }
}

impl Transport for MqttTransport {
    fn maintain(&mut self) -> SessionEvent {
        if self.link_up && self.session_up {
            return SessionEvent::Unchanged;
        }

        while !self.link_up {
            match TcpStream::connect((self.host.as_str(), self.port)) {
                Ok(_) => {
                    info!(host = %self.host, port = self.port, "link up");
                    self.link_up = true;
                }
                Err(e) => {
                    warn!("broker unreachable: {e}");
                    thread::sleep(self.retry.next_delay());
                }
            }
        }

        while !self.session_up {
            if self.open_session() {
                self.session_up = true;
            } else {
                thread::sleep(self.retry.next_delay());
            }
        }

        self.retry.reset();
        SessionEvent::Established
    }

    fn publish(
        &mut self,
        topic: &str,
        payload: &[u8],
        qos: QoS,
        retain: bool,
    ) -> Result<(), TransportError> {
        let Some(client) = self.client.as_mut() else {
            return Err(TransportError::NotConnected);
        };
        match client.publish(topic, qos, retain, payload) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.drop_session();
                Err(TransportError::Publish(e))
            }
        }
    }

    fn pump(&mut self) {
        let Some(connection) = self.connection.as_mut() else {
            return;
        };

        let mut failed = false;
        for _ in 0..MAX_PUMP_EVENTS {
            match connection.recv_timeout(PUMP_TIMEOUT) {
                Ok(Ok(event)) => trace!(?event, "mqtt event"),
                Ok(Err(e)) => {
                    warn!("mqtt connection lost: {e}");
                    failed = true;
                    break;
                }
                Err(_) => break, // nothing pending
            }
        }
        if failed {
            self.drop_session();
        }
    }

    fn is_connected(&self) -> bool {
        self.link_up && self.session_up
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_policy_never_backs_off() {
        let mut policy = RetryPolicy::fixed(Duration::from_millis(2000));
        for _ in 0..10 {
            assert_eq!(policy.next_delay(), Duration::from_millis(2000));
        }
        policy.reset();
        assert_eq!(policy.next_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn transport_starts_disconnected() {
        let transport = MqttTransport::new(
            "broker.invalid",
            1883,
            "test-node",
            RetryPolicy::fixed(Duration::from_millis(100)),
        );
        assert!(!transport.is_connected());
    }
}
