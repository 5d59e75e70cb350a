// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire representation of the controller's HSV color state.

use serde::{Deserialize, Serialize};

/// The HSV object exchanged with the controller.
///
/// Appears both in the fade command body (`POST /color`) and in the status
/// report (`GET /color`):
///
/// - `h`: hue in degrees (0-360)
/// - `s`: saturation in percent (0-100)
/// - `v`: brightness in percent (0-100), 0 meaning off
/// - `ct`: white channel color temperature; 0 when the controller drives a
///   pure RGB color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvData {
    h: f64,
    s: f64,
    v: f64,
    ct: f64,
}

impl HsvData {
    /// Creates a new HSV wire object.
    #[must_use]
    pub const fn new(h: f64, s: f64, v: f64, ct: f64) -> Self {
        Self { h, s, v, ct }
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn h(&self) -> f64 {
        self.h
    }

    /// Returns the saturation in percent.
    #[must_use]
    pub const fn s(&self) -> f64 {
        self.s
    }

    /// Returns the brightness in percent.
    #[must_use]
    pub const fn v(&self) -> f64 {
        self.v
    }

    /// Returns the color temperature as reported on the wire.
    #[must_use]
    pub const fn ct(&self) -> f64 {
        self.ct
    }
}
