use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};

/// Configuration of a [`Recognizer`](crate::Recognizer).
#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecognizerConfig {
    /// Caps how often drag and pinch moves are reported per second. `0` disables throttling.
    pub fps: u32,
    /// How long a lifted single contact waits for a second tap before it is reported as a single
    /// tap.
    #[serde(rename = "single_tap_delay_ms", deserialize_with = "millis")]
    pub single_tap_delay: Duration,
}

impl RecognizerConfig {
    pub const DEFAULT_FPS: u32 = 60;
    pub const DEFAULT_SINGLE_TAP_DELAY: Duration = Duration::from_millis(350);

    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).context("Failed to parse the recognizer configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.single_tap_delay.is_zero() {
            bail!("The single tap delay must be longer than zero");
        }
        Ok(())
    }

    /// The minimum time between two reported drag or pinch moves.
    pub fn move_interval(&self) -> Duration {
        if self.fps == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            fps: Self::DEFAULT_FPS,
            single_tap_delay: Self::DEFAULT_SINGLE_TAP_DELAY,
        }
    }
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_keys() {
        let config = RecognizerConfig::from_toml("fps = 30").unwrap();
        assert_eq!(config.fps, 30);
        assert_eq!(config.single_tap_delay, Duration::from_millis(350));
        assert_eq!(RecognizerConfig::from_toml("").unwrap(), RecognizerConfig::default());
    }

    #[test]
    fn move_interval_follows_fps() {
        let config = RecognizerConfig::default();
        assert!(config.move_interval() > Duration::from_millis(16));
        assert!(config.move_interval() < Duration::from_millis(17));

        let unthrottled = RecognizerConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(unthrottled.move_interval(), Duration::ZERO);
    }

    #[test]
    fn zero_tap_delay_is_rejected() {
        assert!(RecognizerConfig::from_toml("single_tap_delay_ms = 0").is_err());
        assert!(RecognizerConfig::from_toml("fps = \"fast\"").is_err());
        assert!(RecognizerConfig::from_toml("frames = 10").is_err());
    }
}
