// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command bodies sent to the controller.
//!
//! The color API takes JSON bodies on `POST /color`; the only command this
//! library issues is the fade transition in [`FadeRequest`].

mod fade;

pub use fade::FadeRequest;
