// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the controller's color API.

use std::time::Duration;

use reqwest::Client;

use crate::command::FadeRequest;
use crate::error::{Error, ParseError, ProtocolError};
use crate::response::ColorReport;

/// Configuration for reaching an RGBWW controller.
///
/// # Examples
///
/// ```
/// use rgbww_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.40")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - The hostname or IP address of the controller
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") {
            return self.host.clone();
        }
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { base_url, client })
    }
}

/// HTTP client bound to one controller's `/color` endpoint.
///
/// # Examples
///
/// ```no_run
/// use rgbww_lib::protocol::HttpClient;
///
/// # async fn example() -> rgbww_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.40")?;
/// let report = client.fetch_color().await?;
/// println!("brightness: {}", report.hsv().v());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the controller.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn color_url(&self) -> String {
        format!("{}/color", self.base_url)
    }

    /// Fetches the controller's current color state.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a non-success
    /// status, and a parse error when the body is not a valid color report.
    pub async fn fetch_color(&self) -> Result<ColorReport, Error> {
        let url = self.color_url();

        tracing::debug!(url = %url, "Polling controller state");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        check_status(&response)?;

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received color report");

        let report = serde_json::from_str(&body).map_err(ParseError::Json)?;
        Ok(report)
    }

    /// Sends a fade command.
    ///
    /// The response body is only logged; the controller's answer carries no
    /// information the next poll does not.
    ///
    /// # Errors
    ///
    /// Returns a protocol error on transport failure or a non-success
    /// status.
    pub async fn send_fade(&self, request: &FadeRequest) -> Result<(), Error> {
        let url = self.color_url();

        tracing::debug!(url = %url, request = ?request, "Sending fade command");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        check_status(&response)?;

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Fade command accepted");

        Ok(())
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ProtocolError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ProtocolError::ConnectionFailed(format!(
            "HTTP {} - {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("192.168.1.40");
        assert_eq!(config.host(), "192.168.1.40");
        assert_eq!(config.port(), 80);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn base_url_default_port() {
        let config = HttpConfig::new("192.168.1.40");
        assert_eq!(config.base_url(), "http://192.168.1.40");
    }

    #[test]
    fn base_url_custom_port() {
        let config = HttpConfig::new("192.168.1.40").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.40:8080");
    }

    #[test]
    fn base_url_keeps_explicit_scheme() {
        let config = HttpConfig::new("http://192.168.1.40:8080");
        assert_eq!(config.base_url(), "http://192.168.1.40:8080");
    }

    #[test]
    fn into_client_rejects_empty_host() {
        let result = HttpConfig::new("").into_client();
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }

    #[test]
    fn client_color_url() {
        let client = HttpClient::new("192.168.1.40").unwrap();
        assert_eq!(client.color_url(), "http://192.168.1.40/color");
    }

    #[test]
    fn config_builder_chain() {
        let config = HttpConfig::new("led.local")
            .with_port(8080)
            .with_timeout(Duration::from_secs(2));

        assert_eq!(config.host(), "led.local");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }
}
