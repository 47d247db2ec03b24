use std::time::Duration;

/// A cursor that is visible for the first half of every period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blink {
    period: Duration,
}

impl Blink {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_visible(&self, elapsed: Duration) -> bool {
        let period = self.period.as_millis().max(2);
        elapsed.as_millis() % period < period / 2
    }
}

impl Default for Blink {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
