//! Simulated network delays.

use std::time::Duration;

use rand::Rng;

/// Typing delay bounds for the assistant, in milliseconds.
pub const TYPING_DELAY_MIN_MS: u64 = 700;
pub const TYPING_DELAY_MAX_MS: u64 = 1300;

/// Waits the default delay of each operation, or a configured override.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency {
    override_ms: Option<u64>,
}

impl Latency {
    pub fn new(override_ms: Option<u64>) -> Self {
        Self { override_ms }
    }

    /// No delays at all.
    pub fn none() -> Self {
        Self::new(Some(0))
    }

    pub fn duration(&self, default_ms: u64) -> Duration {
        Duration::from_millis(self.override_ms.unwrap_or(default_ms))
    }

    /// A random 700..=1300 ms typing pause, unless overridden.
    pub fn typing_delay(&self) -> Duration {
        match self.override_ms {
            Some(ms) => Duration::from_millis(ms),
            None => Duration::from_millis(
                rand::thread_rng().gen_range(TYPING_DELAY_MIN_MS..=TYPING_DELAY_MAX_MS),
            ),
        }
    }

    pub async fn wait(&self, default_ms: u64) {
        let delay = self.duration(default_ms);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override() {
        assert_eq!(Latency::default().duration(250), Duration::from_millis(250));
        assert_eq!(Latency::new(Some(10)).duration(250), Duration::from_millis(10));
        assert!(Latency::none().typing_delay().is_zero());
    }

    #[test]
    fn test_typing_delay_range() {
        let latency = Latency::default();
        for _ in 0..50 {
            let ms = latency.typing_delay().as_millis() as u64;
            assert!((TYPING_DELAY_MIN_MS..=TYPING_DELAY_MAX_MS).contains(&ms));
        }
    }
}
