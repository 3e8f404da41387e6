use std::time::Duration;

/// Artificial read/write pauses approximating the request latency of the
/// original remote API. Tests run with [`SimulatedLatency::disabled`].
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    read: Duration,
    write: Duration,
}

impl SimulatedLatency {
    pub fn new(read: Duration, write: Duration) -> Self {
        Self { read, write }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub(crate) async fn read_pause(&self) {
        Self::pause(self.read).await;
    }

    pub(crate) async fn write_pause(&self) {
        Self::pause(self.write).await;
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(600))
    }
}
