// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Notification callbacks toward the home-automation side.
//!
//! The accessory layer does not poll this library; after every successful
//! reconcile the registered callbacks receive the refreshed values of the
//! five observable characteristics, and every failed device exchange fires
//! the fault callbacks so the host can flag the device as unreachable.

mod callback;

pub use callback::{CallbackRegistry, SubscriptionId};
