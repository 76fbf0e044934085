//! Engine configuration
//!
//! Every field defaults to the timing of the reference panel, so an empty
//! JSON/YAML document deserializes to [`EngineConfig::default`].

use cluster_filters::{
    DEBOUNCE_MS, DebounceConfig, EPOCH_TICKS, GEAR_HOLD_MS, GEAR_RELEASE_MS, GearTiming,
    TIMER_CEILING_MS,
};
use cluster_inputs::RAW_ANALOG_MAX;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Longest epoch whose accumulator cannot overflow at full-scale input.
pub const MAX_EPOCH_TICKS: u32 = u32::MAX / RAW_ANALOG_MAX as u32;

/// Default clamp applied to one tick's elapsed time.
pub const MAX_TICK_MS: u32 = 100;

/// Default scheduling quantum of the runner.
pub const TICK_PERIOD_MS: u32 = 1;

/// Default half-period of the heartbeat LED.
pub const HEARTBEAT_PERIOD_MS: u32 = 500;

/// Timing and reporting parameters of the poll engine.
///
/// Every field has a default, so a document only names what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Digital commit threshold
    pub debounce_ms: u32,
    /// Hold/release timer saturation
    pub timer_ceiling_ms: u32,
    /// Analog block length in ticks
    pub epoch_ticks: u32,
    /// Largest elapsed time a single tick accepts
    pub max_tick_ms: u32,
    /// Minimum elapsed time before the runner ticks
    pub tick_period_ms: u32,
    /// Heartbeat LED half-period
    pub heartbeat_period_ms: u32,
    /// Release time closing a gear episode
    pub gear_release_ms: u32,
    /// Hold time separating a gear tap from a long hold
    pub gear_hold_ms: u32,
    /// First epoch reports every gauge even when unchanged
    pub report_on_boot: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            timer_ceiling_ms: TIMER_CEILING_MS,
            epoch_ticks: EPOCH_TICKS,
            max_tick_ms: MAX_TICK_MS,
            tick_period_ms: TICK_PERIOD_MS,
            heartbeat_period_ms: HEARTBEAT_PERIOD_MS,
            gear_release_ms: GEAR_RELEASE_MS,
            gear_hold_ms: GEAR_HOLD_MS,
            report_on_boot: true,
        }
    }
}

fn check(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl EngineConfig {
    /// Check every field against its range.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range. Gear thresholds must stay
    /// below the timer ceiling, since a saturated timer could never exceed
    /// them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("debounce_ms", self.debounce_ms, 1, u32::MAX)?;
        check("timer_ceiling_ms", self.timer_ceiling_ms, 1, u32::MAX)?;
        check("epoch_ticks", self.epoch_ticks, 1, MAX_EPOCH_TICKS)?;
        check("max_tick_ms", self.max_tick_ms, 1, u32::MAX)?;
        check("tick_period_ms", self.tick_period_ms, 1, u32::MAX)?;
        check("heartbeat_period_ms", self.heartbeat_period_ms, 1, u32::MAX)?;

        let below_ceiling = self.timer_ceiling_ms.saturating_sub(1);
        check("gear_release_ms", self.gear_release_ms, 1, below_ceiling)?;
        check("gear_hold_ms", self.gear_hold_ms, 1, below_ceiling)?;
        Ok(())
    }

    /// Debounce settings derived from this configuration.
    pub fn debounce(&self) -> DebounceConfig {
        DebounceConfig::new(self.debounce_ms, self.timer_ceiling_ms)
    }

    /// Gear gesture thresholds derived from this configuration.
    pub fn gear_timing(&self) -> GearTiming {
        GearTiming::new(self.gear_release_ms, self.gear_hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() -> Result<(), ConfigError> {
        EngineConfig::default().validate()
    }

    #[test]
    fn test_default_matches_filter_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.debounce(), DebounceConfig::default());
        assert_eq!(config.gear_timing(), GearTiming::default());
        assert_eq!(config.epoch_ticks, 128);
        assert_eq!(config.max_tick_ms, 100);
        assert!(config.report_on_boot);
    }

    #[test]
    fn test_rejects_zero_debounce() {
        let config = EngineConfig {
            debounce_ms: 0,
            ..EngineConfig::default()
        };
        let err = config.validate();
        assert_eq!(err.map_err(|e| e.field()), Err("debounce_ms"));
    }

    #[test]
    fn test_rejects_overflowing_epoch() {
        let config = EngineConfig {
            epoch_ticks: MAX_EPOCH_TICKS + 1,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate().map_err(|e| e.field()), Err("epoch_ticks"));

        let config = EngineConfig {
            epoch_ticks: MAX_EPOCH_TICKS,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_gear_threshold_at_ceiling() {
        let config = EngineConfig {
            timer_ceiling_ms: 750,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate().map_err(|e| e.field()), Err("gear_hold_ms"));

        let config = EngineConfig {
            timer_ceiling_ms: 200,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate().map_err(|e| e.field()),
            Err("gear_release_ms")
        );
    }

    #[test]
    fn test_empty_json_is_default() -> Result<(), serde_json::Error> {
        let config: EngineConfig = serde_json::from_str("{}")?;
        assert_eq!(config, EngineConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_yaml_overrides() -> Result<(), serde_yaml::Error> {
        let config: EngineConfig = serde_yaml::from_str("debounce_ms: 5\nreport_on_boot: false\n")?;
        assert_eq!(config.debounce_ms, 5);
        assert!(!config.report_on_boot);
        assert_eq!(config.epoch_ticks, EPOCH_TICKS);
        Ok(())
    }

    #[test]
    fn test_unknown_field_rejected() {
        let parsed: Result<EngineConfig, _> = serde_json::from_str(r#"{"debounce": 5}"#);
        assert!(parsed.is_err());
    }
}
