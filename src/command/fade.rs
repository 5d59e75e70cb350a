// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fade command construction.

use std::time::Duration;

use serde::Serialize;

use crate::state::LightState;
use crate::types::HsvData;

/// A fade command as POSTed to the controller's `/color` endpoint.
///
/// The controller transitions from its current output to the target HSV
/// over `t` milliseconds. The request always carries the full target state;
/// a single-characteristic change is merged into the cached state before
/// the command is built.
///
/// Serialized shape:
///
/// ```json
/// {"hsv":{"h":120.0,"s":100.0,"v":50.0,"ct":2700.0},"cmd":"fade","t":600}
/// ```
///
/// The optional `q` (enqueue behind a running transition instead of
/// replacing it) and `d` (hue travel direction) flags of the controller
/// firmware are omitted from the body unless set.
#[derive(Debug, Clone, Serialize)]
pub struct FadeRequest {
    hsv: HsvData,
    cmd: &'static str,
    /// Fade duration in milliseconds.
    t: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    d: Option<u8>,
}

impl FadeRequest {
    /// Fade duration used when none is configured.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(600);

    /// Creates a fade command targeting the given state.
    #[must_use]
    pub fn new(state: LightState, duration: Duration) -> Self {
        Self {
            hsv: state.to_hsv(),
            cmd: "fade",
            t: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            q: None,
            d: None,
        }
    }

    /// Requests queueing behind a transition already running on the device.
    #[must_use]
    pub fn with_queue(mut self, queue: bool) -> Self {
        self.q = Some(queue);
        self
    }

    /// Sets the hue travel direction flag.
    #[must_use]
    pub fn with_direction(mut self, direction: u8) -> Self {
        self.d = Some(direction);
        self
    }

    /// Returns the target HSV object.
    #[must_use]
    pub const fn hsv(&self) -> HsvData {
        self.hsv
    }

    /// Returns the fade duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LightChange;

    #[test]
    fn serializes_full_body() {
        let mut state = LightState::new();
        state.apply(&LightChange::hue(120.0));
        state.apply(&LightChange::brightness(50.0));

        let request = FadeRequest::new(state, Duration::from_millis(600));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "hsv": {"h": 120.0, "s": 0.0, "v": 50.0, "ct": 2700.0},
                "cmd": "fade",
                "t": 600
            })
        );
    }

    #[test]
    fn optional_flags_are_omitted() {
        let request = FadeRequest::new(LightState::new(), FadeRequest::DEFAULT_DURATION);
        let json = serde_json::to_string(&request).unwrap();

        assert!(!json.contains("\"q\""));
        assert!(!json.contains("\"d\""));
    }

    #[test]
    fn optional_flags_serialize_when_set() {
        let request = FadeRequest::new(LightState::new(), FadeRequest::DEFAULT_DURATION)
            .with_queue(true)
            .with_direction(1);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["q"], serde_json::json!(true));
        assert_eq!(json["d"], serde_json::json!(1));
    }

    #[test]
    fn duration_in_milliseconds() {
        let request = FadeRequest::new(LightState::new(), Duration::from_secs(2));
        assert_eq!(request.duration_ms(), 2000);
    }
}
