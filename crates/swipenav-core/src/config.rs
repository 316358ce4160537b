#![forbid(unsafe_code)]

//! Controller configuration.

use std::time::Duration;

use crate::animation::Easing;
use crate::error::{Result, SwipeError};
use crate::position::PeripheralSet;
use crate::snap::{DEFAULT_SNAP_FRACTION, SnapPolicy};

/// Default commit transition duration (200ms).
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Thresholds, timing and initial visibility for a [`SwipeController`].
///
/// [`SwipeController`]: crate::controller::SwipeController
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Fraction of the width within which a horizontal pan returns to center
    /// (default: 0.15).
    pub horizontal_snap_fraction: f64,
    /// Fraction of the height within which a vertical pan returns to center
    /// (default: 0.15).
    pub vertical_snap_fraction: f64,
    /// Duration of the commit transition (default: 200ms).
    pub transition_duration: Duration,
    /// Easing of the commit transition (default: ease-in-out).
    pub easing: Easing,
    /// Peripheral views attached at construction (default: none).
    pub attached: PeripheralSet,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            horizontal_snap_fraction: DEFAULT_SNAP_FRACTION,
            vertical_snap_fraction: DEFAULT_SNAP_FRACTION,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            easing: Easing::default(),
            attached: PeripheralSet::empty(),
        }
    }
}

impl SwipeConfig {
    /// Set both snap fractions (builder pattern).
    #[must_use]
    pub fn with_snap_fraction(mut self, fraction: f64) -> Self {
        self.horizontal_snap_fraction = fraction;
        self.vertical_snap_fraction = fraction;
        self
    }

    /// Set the horizontal snap fraction (builder pattern).
    #[must_use]
    pub fn with_horizontal_snap_fraction(mut self, fraction: f64) -> Self {
        self.horizontal_snap_fraction = fraction;
        self
    }

    /// Set the vertical snap fraction (builder pattern).
    #[must_use]
    pub fn with_vertical_snap_fraction(mut self, fraction: f64) -> Self {
        self.vertical_snap_fraction = fraction;
        self
    }

    /// Set the transition duration (builder pattern).
    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Set the transition easing (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the initially attached peripherals (builder pattern).
    #[must_use]
    pub fn with_attached(mut self, attached: PeripheralSet) -> Self {
        self.attached = attached;
        self
    }

    /// Check the configuration.
    ///
    /// Fractions must be finite and in `[0.0, 0.5]`; above one half the
    /// center band and the peripheral band would overlap.
    pub fn validate(&self) -> Result<()> {
        for (name, fraction) in [
            ("horizontal_snap_fraction", self.horizontal_snap_fraction),
            ("vertical_snap_fraction", self.vertical_snap_fraction),
        ] {
            if !fraction.is_finite() || !(0.0..=0.5).contains(&fraction) {
                return Err(SwipeError::InvalidConfig(format!(
                    "{name} must be within [0, 0.5], got {fraction}"
                )));
            }
        }
        Ok(())
    }

    /// The snap policy described by this configuration.
    pub fn snap_policy(&self) -> SnapPolicy {
        SnapPolicy {
            horizontal_fraction: self.horizontal_snap_fraction,
            vertical_fraction: self.vertical_snap_fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SwipeConfig::default();
        assert_eq!(config.horizontal_snap_fraction, 0.15);
        assert_eq!(config.vertical_snap_fraction, 0.15);
        assert_eq!(config.transition_duration, Duration::from_millis(200));
        assert_eq!(config.easing, Easing::EaseInOut);
        assert!(config.attached.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let config = SwipeConfig::default()
            .with_snap_fraction(0.25)
            .with_vertical_snap_fraction(0.1)
            .with_transition_duration(Duration::from_millis(350))
            .with_easing(Easing::Linear)
            .with_attached(PeripheralSet::LEFT | PeripheralSet::TOP);
        assert_eq!(config.horizontal_snap_fraction, 0.25);
        assert_eq!(config.vertical_snap_fraction, 0.1);
        assert_eq!(config.transition_duration, Duration::from_millis(350));
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.attached, PeripheralSet::LEFT | PeripheralSet::TOP);
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        let err = SwipeConfig::default()
            .with_horizontal_snap_fraction(0.6)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SwipeError::InvalidConfig(ref m) if m.contains("horizontal")));

        assert!(
            SwipeConfig::default()
                .with_vertical_snap_fraction(-0.01)
                .validate()
                .is_err()
        );
        assert!(
            SwipeConfig::default()
                .with_snap_fraction(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn boundary_fractions_are_valid() {
        assert!(SwipeConfig::default().with_snap_fraction(0.0).validate().is_ok());
        assert!(SwipeConfig::default().with_snap_fraction(0.5).validate().is_ok());
    }

    #[test]
    fn snap_policy_mirrors_fractions() {
        let policy = SwipeConfig::default()
            .with_horizontal_snap_fraction(0.2)
            .snap_policy();
        assert_eq!(policy.horizontal_fraction, 0.2);
        assert_eq!(policy.vertical_fraction, 0.15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_json() {
        let config: SwipeConfig =
            serde_json::from_str(r#"{"horizontal_snap_fraction":0.3,"easing":"linear"}"#).unwrap();
        assert_eq!(config.horizontal_snap_fraction, 0.3);
        assert_eq!(config.vertical_snap_fraction, 0.15);
        assert_eq!(config.easing, Easing::Linear);
    }
}
