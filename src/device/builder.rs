// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder and poller task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::command::FadeRequest;
use crate::device::{Device, DeviceInner};
use crate::error::Error;
use crate::protocol::HttpConfig;
use crate::state::StateStore;
use crate::subscription::CallbackRegistry;

/// Builder for [`Device`] instances.
///
/// Besides the HTTP connection settings carried by [`HttpConfig`], the
/// builder exposes the three timing knobs of the synchronization engine:
/// the periodic poll interval, the fade duration sent with every command,
/// and the settle delay before the post-push verification poll.
///
/// # Examples
///
/// ```no_run
/// use rgbww_lib::Device;
/// use std::time::Duration;
///
/// # async fn example() -> rgbww_lib::Result<()> {
/// let device = Device::http("192.168.1.40")
///     .with_poll_interval(Duration::from_secs(180))
///     .with_fade_duration(Duration::from_millis(400))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceBuilder {
    config: HttpConfig,
    poll_interval: Duration,
    fade_duration: Duration,
    settle_delay: Duration,
}

impl DeviceBuilder {
    /// Default interval between periodic polls.
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

    /// Default delay before the post-push verification poll.
    pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

    /// Creates a new builder with the specified HTTP configuration.
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            fade_duration: FadeRequest::DEFAULT_DURATION,
            settle_delay: Self::DEFAULT_SETTLE_DELAY,
        }
    }

    /// Sets the interval between periodic polls.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the fade duration sent with every command.
    #[must_use]
    pub fn with_fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Sets the delay before the post-push verification poll.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the configured poll interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the device and starts its poller.
    ///
    /// The poller performs its first poll immediately, so the cache stops
    /// serving the startup default as soon as the controller answers.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime; the poller is spawned on
    /// the current runtime.
    pub fn build(self) -> Result<Device, Error> {
        let client = self.config.into_client()?;

        let inner = Arc::new(DeviceInner {
            client,
            store: StateStore::new(),
            callbacks: CallbackRegistry::new(),
            fade_duration: self.fade_duration,
            settle_delay: self.settle_delay,
        });

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        spawn_poller(Arc::clone(&inner), self.poll_interval, shutdown_rx);

        Ok(Device::new(inner, shutdown_tx))
    }
}

/// Runs the periodic reconcile loop until shutdown.
///
/// The first tick of the interval fires immediately. The loop also ends
/// when the device is dropped and the watch sender disappears.
fn spawn_poller(
    inner: Arc<DeviceInner>,
    poll_interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => inner.reconcile().await,
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Poller stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = DeviceBuilder::new(HttpConfig::new("192.168.1.40"));
        assert_eq!(builder.poll_interval(), Duration::from_secs(60));
        assert_eq!(builder.fade_duration, Duration::from_millis(600));
        assert_eq!(builder.settle_delay, Duration::from_secs(1));
    }

    #[test]
    fn builder_overrides() {
        let builder = DeviceBuilder::new(HttpConfig::new("192.168.1.40"))
            .with_poll_interval(Duration::from_secs(1800))
            .with_fade_duration(Duration::from_millis(250))
            .with_settle_delay(Duration::from_millis(100))
            .with_timeout(Duration::from_secs(2));

        assert_eq!(builder.poll_interval(), Duration::from_secs(1800));
        assert_eq!(builder.fade_duration, Duration::from_millis(250));
        assert_eq!(builder.settle_delay, Duration::from_millis(100));
        assert_eq!(builder.config().timeout(), Duration::from_secs(2));
    }

    #[tokio::test]
    async fn build_rejects_empty_host() {
        let result = DeviceBuilder::new(HttpConfig::new("")).build();
        assert!(result.is_err());
    }
}
