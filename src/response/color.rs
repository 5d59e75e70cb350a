// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color status report parsing.

use serde::Deserialize;

use crate::state::LightState;
use crate::types::HsvData;

/// Reply body of `GET /color`.
///
/// The controller reports its logical HSV state plus, depending on
/// firmware, the raw per-channel PWM breakdown:
///
/// ```json
/// {"hsv":{"h":0,"s":0,"v":100,"ct":2700},
///  "raw":{"r":0,"g":0,"b":0,"ww":512,"cw":511}}
/// ```
///
/// Only `hsv` is required; the raw breakdown is informational and plays no
/// part in reconciliation.
///
/// # Examples
///
/// ```
/// use rgbww_lib::response::ColorReport;
///
/// let json = r#"{"hsv":{"h":120,"s":100,"v":50,"ct":2700}}"#;
/// let report: ColorReport = serde_json::from_str(json).unwrap();
/// assert!((report.hsv().v() - 50.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ColorReport {
    hsv: HsvData,

    #[serde(default)]
    raw: Option<RawChannels>,
}

impl ColorReport {
    /// Returns the reported HSV object.
    #[must_use]
    pub const fn hsv(&self) -> HsvData {
        self.hsv
    }

    /// Returns the raw channel breakdown if the firmware included one.
    #[must_use]
    pub const fn raw(&self) -> Option<RawChannels> {
        self.raw
    }

    /// Converts the report into a [`LightState`], applying the
    /// zero-substitution guard for the color temperature.
    #[must_use]
    pub fn into_state(self) -> LightState {
        LightState::from_hsv(self.hsv)
    }
}

/// Raw per-channel output levels of an RGBWW controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RawChannels {
    r: u16,
    g: u16,
    b: u16,
    ww: u16,
    cw: u16,
}

impl RawChannels {
    /// Returns the red channel level.
    #[must_use]
    pub const fn r(&self) -> u16 {
        self.r
    }

    /// Returns the green channel level.
    #[must_use]
    pub const fn g(&self) -> u16 {
        self.g
    }

    /// Returns the blue channel level.
    #[must_use]
    pub const fn b(&self) -> u16 {
        self.b
    }

    /// Returns the warm white channel level.
    #[must_use]
    pub const fn ww(&self) -> u16 {
        self.ww
    }

    /// Returns the cold white channel level.
    #[must_use]
    pub const fn cw(&self) -> u16 {
        self.cw
    }
}
