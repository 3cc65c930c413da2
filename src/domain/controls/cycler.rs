// SPDX-License-Identifier: MPL-2.0
//! Numeric stepping for the sensitivity and scale settings.
//!
//! A cycler walks a value upward by a fixed step and wraps back once the value
//! has gone past its maximum. The two instances do not wrap to the same place:
//! sensitivity restarts at its minimum, scale restarts at `1.0`.

// =============================================================================
// Bounds
// =============================================================================

/// Mouse sensitivity bounds.
pub mod sensitivity_bounds {
    /// Lowest sensitivity, also the wrap target.
    pub const MIN: f64 = 0.1;
    /// Values strictly above this wrap on the next cycle.
    pub const MAX: f64 = 2.0;
    /// Increment per cycle.
    pub const STEP: f64 = 0.1;
}

/// Virtual-control scale bounds.
pub mod scale_bounds {
    /// Lowest scale.
    pub const MIN: f64 = 1.0;
    /// Values strictly above this wrap on the next cycle.
    pub const MAX: f64 = 1.5;
    /// Increment per cycle.
    pub const STEP: f64 = 0.1;
    /// Value used after wrapping.
    pub const WRAP_TO: f64 = 1.0;
}

// =============================================================================
// Cycler
// =============================================================================

/// Stepping rule for one numeric setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycler {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    wrap_to: f64,
}

/// Mouse sensitivity: 0.1 → 2.0 by 0.1, wraps to the minimum.
pub const SENSITIVITY: Cycler = Cycler {
    min: sensitivity_bounds::MIN,
    max: sensitivity_bounds::MAX,
    step: sensitivity_bounds::STEP,
    wrap_to: sensitivity_bounds::MIN,
};

/// Virtual-control scale: 1.0 → 1.5 by 0.1, wraps to 1.0.
pub const SCALE: Cycler = Cycler {
    min: scale_bounds::MIN,
    max: scale_bounds::MAX,
    step: scale_bounds::STEP,
    wrap_to: scale_bounds::WRAP_TO,
};

impl Cycler {
    /// Returns the value following `current`.
    ///
    /// The wrap check looks at `current`, not at the stepped result, so the
    /// maximum itself still steps once past the bound before wrapping.
    #[must_use]
    pub fn cycle(&self, current: f64) -> f64 {
        if current > self.max {
            self.wrap_to
        } else {
            current + self.step
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a setting as a `D.D` label.
///
/// The value is rounded to one decimal, rendered in its shortest form and
/// padded with `.0` when only a bare digit remains.
#[must_use]
pub fn format_label(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let mut label = rounded.to_string();
    if label.len() == 1 {
        label.push_str(".0");
    }
    label
}

/// Label shown for the untouched (neutral) value.
pub const NEUTRAL_LABEL: &str = "1.0";

/// Returns true if `value` displays as the neutral `1.0`.
#[must_use]
pub fn is_neutral(value: f64) -> bool {
    format_label(value) == NEUTRAL_LABEL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F64_EPSILON};

    #[test]
    fn sensitivity_steps_across_whole_range() {
        for tenth in 1..=20 {
            let current = f64::from(tenth) / 10.0;
            assert_abs_diff_eq!(
                SENSITIVITY.cycle(current),
                current + 0.1,
                epsilon = F64_EPSILON
            );
        }
    }

    #[test]
    fn sensitivity_wraps_to_minimum_past_max() {
        assert_abs_diff_eq!(SENSITIVITY.cycle(2.1), 0.1);
        assert_abs_diff_eq!(SENSITIVITY.cycle(2.0000001), 0.1);
        assert_abs_diff_eq!(SENSITIVITY.cycle(5.0), 0.1);
    }

    #[test]
    fn sensitivity_at_max_still_steps_once() {
        assert_abs_diff_eq!(SENSITIVITY.cycle(2.0), 2.1, epsilon = F64_EPSILON);
        let past = SENSITIVITY.cycle(2.0);
        assert_abs_diff_eq!(SENSITIVITY.cycle(past), 0.1);
    }

    #[test]
    fn scale_steps_across_whole_range() {
        for tenth in 10..=15 {
            let current = f64::from(tenth) / 10.0;
            assert_abs_diff_eq!(SCALE.cycle(current), current + 0.1, epsilon = F64_EPSILON);
        }
    }

    #[test]
    fn scale_wraps_to_one_past_max() {
        assert_abs_diff_eq!(SCALE.cycle(1.6), 1.0);
        assert_abs_diff_eq!(SCALE.cycle(3.0), 1.0);
    }

    #[test]
    fn wrap_targets_differ_between_cyclers() {
        assert_abs_diff_eq!(SENSITIVITY.cycle(2.1), SENSITIVITY.min);
        assert_abs_diff_eq!(SCALE.cycle(1.6), 1.0);
    }

    #[test]
    fn format_label_pads_whole_numbers() {
        assert_eq!(format_label(1.0), "1.0");
        assert_eq!(format_label(2.0), "2.0");
        assert_eq!(format_label(0.0), "0.0");
    }

    #[test]
    fn format_label_rounds_to_one_decimal() {
        assert_eq!(format_label(1.25), "1.3");
        assert_eq!(format_label(1.24), "1.2");
        assert_eq!(format_label(0.1 + 0.2), "0.3");
        assert_eq!(format_label(1.1 + 0.1), "1.2");
    }

    #[test]
    fn format_label_never_returns_bare_digit() {
        for tenth in 0..=25 {
            let label = format_label(f64::from(tenth) / 10.0);
            assert_eq!(label.len(), 3, "label {label} should read D.D");
        }
    }

    #[test]
    fn neutral_detection_uses_formatted_label() {
        assert!(is_neutral(1.0));
        assert!(is_neutral(0.96));
        assert!(!is_neutral(1.1));
    }
}
