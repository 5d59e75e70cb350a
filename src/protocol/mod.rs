// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport to the controller's color API.
//!
//! The controller speaks plain unauthenticated HTTP with two operations on
//! the `/color` endpoint: `GET` reports the current state, `POST` submits a
//! fade command. Every request is bounded by the configured timeout;
//! nothing here retries on its own.

mod http;

pub use http::{HttpClient, HttpConfig};
