// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the RGBWW library.
//!
//! This module provides the error hierarchy for failures when talking to an
//! LED controller: transport-level communication and response parsing.
//! Device communication errors are deliberately non-fatal for callers of the
//! high-level [`Device`](crate::Device) API; they surface there as fault
//! notifications instead of `Err` values.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during protocol communication.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors related to HTTP communication with the controller.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed (connection refused, timeout, DNS failure).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Device answered with a non-success status code.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing controller responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed, including a missing `hsv` object.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::ConnectionFailed("HTTP 500 - Internal Server Error".to_string());
        assert_eq!(
            err.to_string(),
            "connection failed: HTTP 500 - Internal Server Error"
        );
    }

    #[test]
    fn error_from_protocol_error() {
        let proto = ProtocolError::InvalidAddress("host is required".to_string());
        let err: Error = proto.into();
        assert!(matches!(err, Error::Protocol(_)));
        assert_eq!(
            err.to_string(),
            "protocol error: invalid address: host is required"
        );
    }

    #[test]
    fn error_from_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = ParseError::from(json_err).into();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::UnexpectedFormat("empty body".to_string());
        assert_eq!(err.to_string(), "unexpected response format: empty body");
    }
}
