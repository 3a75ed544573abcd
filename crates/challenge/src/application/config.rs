//! Application Configuration
//!
//! Configuration for the session service. The day length is configurable
//! so a development build can compress a "day" into something watchable;
//! the countdown semantics are unchanged either way.

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};
use platform::duration::SECS_PER_DAY;

/// Environment variable: countdown seconds that make up one timeline day
pub const ENV_SECONDS_PER_DAY: &str = "TRACKER_SECONDS_PER_DAY";

/// Environment variable: ticker period in milliseconds
pub const ENV_TICK_MS: &str = "TRACKER_TICK_MS";

/// Session service configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Seconds represented by one timeline day (86 400 in production)
    pub seconds_per_day: u64,
    /// Wall-clock period between countdown ticks
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seconds_per_day: SECS_PER_DAY,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// Create config for development (one "day" lasts a minute)
    pub fn development() -> Self {
        Self {
            seconds_per_day: 60,
            ..Default::default()
        }
    }

    /// Load config from environment variables, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var(ENV_SECONDS_PER_DAY) {
            let seconds: u64 = value.parse()?;
            if seconds == 0 {
                return Err(AppError::failed_precondition(format!(
                    "{ENV_SECONDS_PER_DAY} must be positive"
                )));
            }
            config.seconds_per_day = seconds;
        }

        if let Ok(value) = std::env::var(ENV_TICK_MS) {
            let millis: u64 = value.parse()?;
            if millis == 0 {
                return Err(AppError::failed_precondition(format!(
                    "{ENV_TICK_MS} must be positive"
                )));
            }
            config.tick_interval = Duration::from_millis(millis);
        }

        Ok(config)
    }
}
