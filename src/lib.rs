// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `RGBWW` Lib - A Rust library to keep home-automation accessories in sync
//! with networked RGBWW LED controllers.
//!
//! The controller exposes a small HTTP color API: `GET /color` reports its
//! HSV state, `POST /color` starts a fade toward a target. This library
//! owns the authoritative local copy of that state and keeps both sides
//! honest: characteristic changes from the accessory layer are pushed as
//! fade commands, and a periodic poll (plus a verification poll shortly
//! after every push) reconciles the cache against what the controller
//! actually did, including changes made behind this library's back (a wall
//! panel, another hub, a running fade animation).
//!
//! # Supported Features
//!
//! - **Characteristic access**: Hue, saturation, brightness, color
//!   temperature, and on/off, with the inverse-form conversion for color
//!   temperature applied at the boundary
//! - **Optimistic pushes**: Setters update the cache immediately and send
//!   the fade command in the background
//! - **Reconciliation**: Immediate startup poll, configurable periodic
//!   cadence, and a post-push verification poll
//! - **Fault signaling**: Communication failures surface as fault
//!   callbacks instead of errors; transient failures self-heal on the
//!   next poll
//!
//! # Quick Start
//!
//! ```no_run
//! use rgbww_lib::Device;
//!
//! #[tokio::main]
//! async fn main() -> rgbww_lib::Result<()> {
//!     let device = Device::http("192.168.1.40").build()?;
//!
//!     // Forward refreshed values to the accessory layer
//!     device.on_brightness_changed(|percent| println!("brightness: {percent}%"));
//!     device.on_fault(|| eprintln!("controller unreachable"));
//!
//!     // Characteristic writes return immediately; the fade command and
//!     // its verification poll run in the background
//!     device.set_power(true);
//!     device.set_hue(120.0);
//!
//!     device.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! ## Custom timing
//!
//! ```no_run
//! use rgbww_lib::Device;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> rgbww_lib::Result<()> {
//!     let device = Device::http("192.168.1.40")
//!         .with_poll_interval(Duration::from_secs(180))
//!         .with_fade_duration(Duration::from_millis(400))
//!         .with_timeout(Duration::from_secs(5))
//!         .build()?;
//!
//!     device.set_color_temperature(370.0);
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod subscription;
pub mod types;

pub use command::FadeRequest;
pub use device::{Device, DeviceBuilder};
pub use error::{Error, ParseError, ProtocolError, Result};
pub use protocol::{HttpClient, HttpConfig};
pub use response::{ColorReport, RawChannels};
pub use state::{LightChange, LightState, StateStore};
pub use subscription::{CallbackRegistry, SubscriptionId};
pub use types::{ColorTemp, HsvData};
