// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color temperature handling for the controller's white channels.
//!
//! The controller's wire protocol carries color temperature in the `ct`
//! field of its HSV object. The home-automation side uses the inverse form
//! (`1,000,000 / ct`), so both conversions live here, together with the
//! substitution rule for controllers that report `ct = 0` while driving a
//! pure RGB color.

use std::fmt;

/// Color temperature in the controller's wire unit.
///
/// A `ColorTemp` is always strictly positive: every constructor substitutes
/// the neutral default for zero, negative, or non-finite inputs, so the
/// outward conversion `1,000,000 / ct` can never divide by zero.
///
/// # Examples
///
/// ```
/// use rgbww_lib::types::ColorTemp;
///
/// let ct = ColorTemp::new(2700.0);
/// assert!((ct.to_external() - 370.37).abs() < 0.01);
///
/// // A pure-color controller reports ct = 0; the neutral default steps in.
/// assert_eq!(ColorTemp::new(0.0), ColorTemp::NEUTRAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ColorTemp(f64);

impl ColorTemp {
    /// Neutral default in the controller's wire unit (~warm white).
    pub const DEFAULT_VALUE: f64 = 2700.0;

    /// The neutral default color temperature.
    pub const NEUTRAL: Self = Self(Self::DEFAULT_VALUE);

    /// Creates a color temperature from a controller-reported value.
    ///
    /// Zero, negative, and non-finite values are replaced by
    /// [`ColorTemp::NEUTRAL`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value > 0.0 && value.is_finite() {
            Self(value)
        } else {
            Self::NEUTRAL
        }
    }

    /// Creates a color temperature from the external (inverse) form.
    ///
    /// Applies `ct = 1,000,000 / external`; out-of-domain externals fall
    /// back to [`ColorTemp::NEUTRAL`].
    #[must_use]
    pub fn from_external(external: f64) -> Self {
        if external > 0.0 && external.is_finite() {
            Self::new(1_000_000.0 / external)
        } else {
            Self::NEUTRAL
        }
    }

    /// Returns the external (inverse) form, `1,000,000 / ct`.
    #[must_use]
    pub fn to_external(self) -> f64 {
        1_000_000.0 / self.0
    }

    /// Returns the raw value in the controller's wire unit.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ColorTemp {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for ColorTemp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ct {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_value_is_kept() {
        let ct = ColorTemp::new(3200.0);
        assert!((ct.value() - 3200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_is_substituted() {
        assert_eq!(ColorTemp::new(0.0), ColorTemp::NEUTRAL);
    }

    #[test]
    fn negative_is_substituted() {
        assert_eq!(ColorTemp::new(-100.0), ColorTemp::NEUTRAL);
    }

    #[test]
    fn non_finite_is_substituted() {
        assert_eq!(ColorTemp::new(f64::NAN), ColorTemp::NEUTRAL);
        assert_eq!(ColorTemp::new(f64::INFINITY), ColorTemp::NEUTRAL);
    }

    #[test]
    fn external_round_trip() {
        for raw in [1.0, 153.0, 370.0, 2700.0, 6500.0, 1_000_000.0] {
            let ct = ColorTemp::new(raw);
            let round_tripped = ColorTemp::from_external(ct.to_external());
            assert!(
                (round_tripped.value() - raw).abs() < 1e-6,
                "round trip of {raw} produced {}",
                round_tripped.value()
            );
        }
    }

    #[test]
    fn external_of_default_is_finite() {
        let external = ColorTemp::new(0.0).to_external();
        assert!(external.is_finite());
        assert!((external - 1_000_000.0 / 2700.0).abs() < 1e-9);
    }

    #[test]
    fn from_external_guards_zero() {
        assert_eq!(ColorTemp::from_external(0.0), ColorTemp::NEUTRAL);
        assert_eq!(ColorTemp::from_external(-370.0), ColorTemp::NEUTRAL);
    }

    #[test]
    fn default_is_neutral() {
        assert_eq!(ColorTemp::default(), ColorTemp::NEUTRAL);
    }

    #[test]
    fn display() {
        assert_eq!(ColorTemp::new(2700.0).to_string(), "ct 2700");
    }
}
