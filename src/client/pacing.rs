use std::time::Duration;

/// Pacing policy applied after each remote call.
///
/// The remote service asks clients to space out requests; this is a courtesy,
/// not a correctness requirement, so tests use [`Pacer::NoDelay`] to run
/// without real sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacer {
    /// Sleep for a fixed interval after every call
    FixedDelay(Duration),
    /// No pause between calls
    NoDelay,
}

/// Default courtesy pause between remote calls (250 ms)
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(250);

impl Default for Pacer {
    fn default() -> Self {
        Self::FixedDelay(DEFAULT_PAUSE)
    }
}

impl Pacer {
    /// Block for the configured interval, if any
    pub fn pause(&self) {
        match self {
            Self::FixedDelay(interval) => std::thread::sleep(*interval),
            Self::NoDelay => {}
        }
    }
}
