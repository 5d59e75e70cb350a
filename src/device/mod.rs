// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for RGBWW controllers.
//!
//! A [`Device`] owns the synchronization engine for one controller: the
//! state store, the pusher translating characteristic changes into fade
//! commands, and the background poller reconciling the cached state with
//! what the controller reports.
//!
//! # Synchronization model
//!
//! Setters write the store optimistically and return immediately; the fade
//! command and its verification poll run on a background task. The
//! controller is the final arbiter: whatever it reports on the next poll
//! overwrites the cache, whether or not the change originated here.
//! Communication failures never surface as errors from setters; they fire
//! the fault callbacks instead.
//!
//! ```no_run
//! use rgbww_lib::Device;
//!
//! #[tokio::main]
//! async fn main() -> rgbww_lib::Result<()> {
//!     let device = Device::http("192.168.1.40").build()?;
//!
//!     device.on_power_changed(|on| println!("light is {}", if on { "on" } else { "off" }));
//!     device.on_fault(|| eprintln!("controller unreachable"));
//!
//!     device.set_power(true);
//!     device.set_hue(120.0);
//!
//!     // ... hand control to the host framework ...
//!
//!     device.shutdown();
//!     Ok(())
//! }
//! ```

mod builder;

pub use builder::DeviceBuilder;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::command::FadeRequest;
use crate::protocol::{HttpClient, HttpConfig};
use crate::state::{LightChange, LightState, StateStore};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::types::ColorTemp;

/// An RGBWW LED controller kept in sync over its HTTP color API.
///
/// Create one via [`Device::http`]; the builder spawns the poller task, so
/// construction must happen inside a Tokio runtime. Dropping the device or
/// calling [`shutdown`](Device::shutdown) stops the periodic poll;
/// in-flight requests finish or time out on their own.
#[derive(Debug)]
pub struct Device {
    inner: Arc<DeviceInner>,
    shutdown_tx: watch::Sender<bool>,
}

/// Shared internals of a device, also held by its background tasks.
#[derive(Debug)]
pub(crate) struct DeviceInner {
    pub(crate) client: HttpClient,
    pub(crate) store: StateStore,
    pub(crate) callbacks: CallbackRegistry,
    pub(crate) fade_duration: Duration,
    pub(crate) settle_delay: Duration,
}

impl Device {
    /// Creates a builder for the controller at the given host.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rgbww_lib::Device;
    ///
    /// # async fn example() -> rgbww_lib::Result<()> {
    /// let device = Device::http("192.168.1.40").build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn http(host: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(HttpConfig::new(host))
    }

    /// Creates a builder from an [`HttpConfig`].
    ///
    /// Use this when port or request timeout need configuring.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> DeviceBuilder {
        DeviceBuilder::new(config)
    }

    pub(crate) fn new(inner: Arc<DeviceInner>, shutdown_tx: watch::Sender<bool>) -> Self {
        Self { inner, shutdown_tx }
    }

    // ========== Characteristic reads ==========

    /// Returns a snapshot of the cached light state.
    #[must_use]
    pub fn state(&self) -> LightState {
        self.inner.store.get()
    }

    /// Returns the cached hue in degrees.
    #[must_use]
    pub fn hue(&self) -> f64 {
        self.inner.store.get().hue()
    }

    /// Returns the cached saturation in percent.
    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.inner.store.get().saturation()
    }

    /// Returns the cached brightness in percent.
    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.inner.store.get().value()
    }

    /// Returns the cached color temperature in the external (inverse) form.
    ///
    /// Always finite: the store never holds a zero color temperature.
    #[must_use]
    pub fn color_temperature(&self) -> f64 {
        self.inner.store.get().color_temp().to_external()
    }

    /// Returns `true` if the light is on (cached brightness above zero).
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.inner.store.get().is_on()
    }

    // ========== Characteristic writes ==========

    /// Requests a hue change (degrees).
    pub fn set_hue(&self, degrees: f64) {
        self.apply_and_push(LightChange::hue(degrees));
    }

    /// Requests a saturation change (percent).
    pub fn set_saturation(&self, percent: f64) {
        self.apply_and_push(LightChange::saturation(percent));
    }

    /// Requests a brightness change (percent).
    pub fn set_brightness(&self, percent: f64) {
        self.apply_and_push(LightChange::brightness(percent));
    }

    /// Requests a color temperature change, external (inverse) form.
    ///
    /// Converted to the controller's wire unit before merging; zero and
    /// negative inputs fall back to the neutral default instead of
    /// producing a division error.
    pub fn set_color_temperature(&self, external: f64) {
        self.apply_and_push(LightChange::ColorTemp(ColorTemp::from_external(external)));
    }

    /// Requests a power change; on raises brightness to 100, off to 0.
    pub fn set_power(&self, on: bool) {
        self.apply_and_push(LightChange::Power(on));
    }

    /// Applies the optimistic write, then pushes if the field changed.
    ///
    /// The push runs on a background task: the setter returns once the
    /// store reflects the intent, and a read issued right after already
    /// observes the new value.
    fn apply_and_push(&self, change: LightChange) {
        if self.inner.store.apply_local(&change) {
            let inner = Arc::clone(&self.inner);
            tokio::spawn(async move {
                inner.push_current().await;
            });
        }
    }

    // ========== Reconciliation ==========

    /// Runs one reconcile pass outside the periodic cadence.
    ///
    /// Fetches the controller's reported state, overwrites the cache and
    /// notifies subscribers; on failure the cache is left untouched and
    /// the fault callbacks fire.
    pub async fn refresh(&self) {
        self.inner.reconcile().await;
    }

    /// Stops the periodic poller.
    ///
    /// In-flight HTTP exchanges are not aborted; they complete or run into
    /// their timeout naturally.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    // ========== Subscriptions ==========

    /// Registers a callback for hue refreshes (degrees).
    pub fn on_hue_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_hue_changed(callback)
    }

    /// Registers a callback for saturation refreshes (percent).
    pub fn on_saturation_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_saturation_changed(callback)
    }

    /// Registers a callback for brightness refreshes (percent).
    pub fn on_brightness_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_brightness_changed(callback)
    }

    /// Registers a callback for color temperature refreshes.
    ///
    /// The callback receives the external (inverse) form of the value.
    pub fn on_color_temp_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_color_temp_changed(callback)
    }

    /// Registers a callback for on/off refreshes.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.inner.callbacks.on_power_changed(callback)
    }

    /// Registers a callback for communication faults.
    pub fn on_fault<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.callbacks.on_fault(callback)
    }

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.callbacks.unsubscribe(id)
    }
}

impl DeviceInner {
    /// Pushes the full cached state as a fade command, then verifies.
    ///
    /// The verification poll runs after the settle delay whether or not
    /// the POST succeeded; a failed push leaves the optimistic value in
    /// the cache until a poll replaces it with the controller's truth.
    pub(crate) async fn push_current(&self) {
        let state = self.store.get();
        let request = FadeRequest::new(state, self.fade_duration);

        if let Err(err) = self.client.send_fade(&request).await {
            tracing::warn!(error = %err, "Fade command failed");
            self.callbacks.dispatch_fault();
        }

        tokio::time::sleep(self.settle_delay).await;
        self.reconcile().await;
    }

    /// Fetches the controller's state and reconciles it into the store.
    pub(crate) async fn reconcile(&self) {
        match self.client.fetch_color().await {
            Ok(report) => {
                let state = report.into_state();
                self.store.apply_remote(state);
                self.callbacks.dispatch_refresh(&state);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Status poll failed");
                self.callbacks.dispatch_fault();
            }
        }
    }
}
