// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for characteristic notifications.
//!
//! This module provides the core types for delivering state refreshes and
//! fault signals to the host framework:
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::LightState;

/// Unique identifier for a subscription.
///
/// This ID is returned when registering a callback and can be used to
/// unsubscribe later. IDs are unique within a device's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for numeric characteristic callbacks.
type ValueCallback = Arc<dyn Fn(f64) + Send + Sync>;

/// Type alias for on/off callbacks.
type PowerCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Type alias for communication-fault callbacks.
type FaultCallback = Arc<dyn Fn() + Send + Sync>;

/// Registry for characteristic notification callbacks.
///
/// Thread-safe via `parking_lot::RwLock`; callbacks are wrapped in `Arc`
/// and called synchronously in arbitrary order.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Hue refresh callbacks (degrees).
    hue_callbacks: RwLock<HashMap<SubscriptionId, ValueCallback>>,
    /// Saturation refresh callbacks (percent).
    saturation_callbacks: RwLock<HashMap<SubscriptionId, ValueCallback>>,
    /// Brightness refresh callbacks (percent).
    brightness_callbacks: RwLock<HashMap<SubscriptionId, ValueCallback>>,
    /// Color temperature refresh callbacks (external inverse form).
    color_temp_callbacks: RwLock<HashMap<SubscriptionId, ValueCallback>>,
    /// On/off refresh callbacks.
    power_callbacks: RwLock<HashMap<SubscriptionId, PowerCallback>>,
    /// Communication-fault callbacks.
    fault_callbacks: RwLock<HashMap<SubscriptionId, FaultCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            hue_callbacks: RwLock::new(HashMap::new()),
            saturation_callbacks: RwLock::new(HashMap::new()),
            brightness_callbacks: RwLock::new(HashMap::new()),
            color_temp_callbacks: RwLock::new(HashMap::new()),
            power_callbacks: RwLock::new(HashMap::new()),
            fault_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for hue refreshes (degrees).
    pub fn on_hue_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.hue_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for saturation refreshes (percent).
    pub fn on_saturation_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.saturation_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for brightness refreshes (percent).
    pub fn on_brightness_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.brightness_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for color temperature refreshes.
    ///
    /// The callback receives the external (inverse) form of the value.
    pub fn on_color_temp_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.color_temp_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for on/off refreshes.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.power_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for communication faults.
    ///
    /// Fired once per failed device exchange; the host typically maps this
    /// to an unreachable status on the on/off characteristic.
    pub fn on_fault<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.fault_callbacks.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.hue_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.saturation_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.brightness_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.color_temp_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.power_callbacks.write().remove(&id).is_some() {
            return true;
        }
        if self.fault_callbacks.write().remove(&id).is_some() {
            return true;
        }
        false
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.hue_callbacks.write().clear();
        self.saturation_callbacks.write().clear();
        self.brightness_callbacks.write().clear();
        self.color_temp_callbacks.write().clear();
        self.power_callbacks.write().clear();
        self.fault_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a reconciled state to all characteristic callbacks.
    ///
    /// All five observable values are delivered on every call, whether or
    /// not they changed; renotification with an unchanged value is
    /// harmless on the receiving side.
    pub fn dispatch_refresh(&self, state: &LightState) {
        {
            let callbacks = self.hue_callbacks.read();
            for callback in callbacks.values() {
                callback(state.hue());
            }
        }
        {
            let callbacks = self.saturation_callbacks.read();
            for callback in callbacks.values() {
                callback(state.saturation());
            }
        }
        {
            let callbacks = self.brightness_callbacks.read();
            for callback in callbacks.values() {
                callback(state.value());
            }
        }
        {
            let callbacks = self.color_temp_callbacks.read();
            for callback in callbacks.values() {
                callback(state.color_temp().to_external());
            }
        }
        {
            let callbacks = self.power_callbacks.read();
            for callback in callbacks.values() {
                callback(state.is_on());
            }
        }
    }

    /// Dispatches a communication fault.
    pub fn dispatch_fault(&self) {
        let callbacks = self.fault_callbacks.read();
        for callback in callbacks.values() {
            callback();
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.hue_callbacks.read().len()
            + self.saturation_callbacks.read().len()
            + self.brightness_callbacks.read().len()
            + self.color_temp_callbacks.read().len()
            + self.power_callbacks.read().len()
            + self.fault_callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish()
    }
}
