// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `Lydos` library.
//!
//! Errors coming from the cloud API are passed through unchanged: the device
//! layer never retries or rewrites them.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the gateway API.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error occurred during device operations.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),
}

/// Errors related to value validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The operation mode name is not a known Lydos plant mode.
    #[error("invalid operation mode: {0}")]
    InvalidMode(String),

    /// A gateway identifier must not be empty.
    #[error("gateway identifier is empty")]
    EmptyGateway,
}

/// Errors related to communication with the gateway API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Login was refused or the session token expired.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The runtime backing the blocking API could not be created.
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Errors related to parsing gateway responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to device operations.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A diff-style update needs the current value, which was never fetched.
    #[error("setting {0} has not been loaded, call update_settings first")]
    SettingNotLoaded(&'static str),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidMode("TURBO".to_string());
        assert_eq!(err.to_string(), "invalid operation mode: TURBO");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::EmptyGateway.into();
        assert!(matches!(err, Error::Value(ValueError::EmptyGateway)));
    }

    #[test]
    fn parse_error_wraps_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: Error = ParseError::from(json_err).into();
        assert!(matches!(err, Error::Parse(ParseError::Json(_))));
        assert!(err.to_string().starts_with("parse error: JSON parse error:"));
    }

    #[test]
    fn device_error_display() {
        let err = DeviceError::SettingNotLoaded("SeMaxSetpointTemperature");
        assert_eq!(
            err.to_string(),
            "setting SeMaxSetpointTemperature has not been loaded, call update_settings first"
        );
    }

    #[test]
    fn protocol_error_wraps_into_error() {
        let err: Error = ProtocolError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "protocol error: authentication failed");
    }
}
