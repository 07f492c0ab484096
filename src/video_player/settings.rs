// SPDX-License-Identifier: MPL-2.0
//! Tunables of one player instance.

use crate::config::{Config, SpeedProfile, DEFAULT_VOLUME_STEP, MAX_VOLUME_STEP, MIN_VOLUME_STEP};
use crate::domain::video::{ControlsHideDelay, SkipStep, SpeedBounds};

/// Settings resolved from the config file and the host's profile choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    pub profile: SpeedProfile,
    pub skip_step: SkipStep,
    pub volume_step: f64,
    pub hide_delay: ControlsHideDelay,
}

impl PlayerSettings {
    /// Default tunables for `profile`.
    pub fn new(profile: SpeedProfile) -> Self {
        Self {
            profile,
            skip_step: SkipStep::default(),
            volume_step: DEFAULT_VOLUME_STEP,
            hide_delay: ControlsHideDelay::default(),
        }
    }

    /// Resolves settings from `config`.
    ///
    /// A profile pinned in the config file wins over `host_profile`.
    /// Out-of-range values are clamped; NaN falls back to the default.
    pub fn from_config(config: &Config, host_profile: SpeedProfile) -> Self {
        let defaults = Self::new(config.playback.speed_profile.unwrap_or(host_profile));
        Self {
            skip_step: config
                .playback
                .skip_secs
                .map_or(defaults.skip_step, SkipStep::new),
            volume_step: config
                .playback
                .volume_step
                .filter(|step| !step.is_nan())
                .map_or(defaults.volume_step, |step| {
                    step.clamp(MIN_VOLUME_STEP, MAX_VOLUME_STEP)
                }),
            hide_delay: config
                .controls
                .hide_delay_ms
                .map_or(defaults.hide_delay, ControlsHideDelay::from_millis),
            ..defaults
        }
    }

    /// Speed range of the active profile.
    pub fn speed_bounds(&self) -> SpeedBounds {
        self.profile.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ControlsConfig, PlaybackConfig};
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    #[test]
    fn config_profile_overrides_host() {
        let mut config = Config::default();
        config.playback.speed_profile = Some(SpeedProfile::Extended);
        let settings = PlayerSettings::from_config(&config, SpeedProfile::Standard);
        assert_eq!(settings.profile, SpeedProfile::Extended);
        assert_abs_diff_eq!(settings.speed_bounds().max, 12.0);
    }

    #[test]
    fn host_profile_used_when_config_is_silent() {
        let settings = PlayerSettings::from_config(&Config::default(), SpeedProfile::Standard);
        assert_eq!(settings, PlayerSettings::new(SpeedProfile::Standard));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            playback: PlaybackConfig {
                speed_profile: None,
                skip_secs: Some(500.0),
                volume_step: Some(2.0),
            },
            controls: ControlsConfig {
                hide_delay_ms: Some(10),
            },
        };
        let settings = PlayerSettings::from_config(&config, SpeedProfile::Extended);
        assert_abs_diff_eq!(settings.skip_step.value(), 30.0);
        assert_abs_diff_eq!(settings.volume_step, MAX_VOLUME_STEP, epsilon = F64_EPSILON);
        assert_eq!(settings.hide_delay.as_millis(), 500);
    }

    #[test]
    fn nan_values_fall_back_to_defaults() {
        let config: Config =
            toml::from_str("[playback]\nskip_secs = nan\nvolume_step = nan\n").unwrap();
        let settings = PlayerSettings::from_config(&config, SpeedProfile::Standard);
        assert_eq!(settings, PlayerSettings::new(SpeedProfile::Standard));
        assert_abs_diff_eq!(settings.skip_step.value(), 5.0);
        assert_abs_diff_eq!(settings.volume_step, DEFAULT_VOLUME_STEP, epsilon = F64_EPSILON);
    }
}
