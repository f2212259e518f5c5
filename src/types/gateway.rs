// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Identifier of a physical appliance in the cloud API.
///
/// Every plant endpoint is addressed by its gateway, e.g.
/// `velis/sePlantData/{gateway}`.
///
/// # Examples
///
/// ```
/// use lydos_lib::types::Gateway;
///
/// let gw = Gateway::new("F0AD4E0C3A1B").unwrap();
/// assert_eq!(gw.as_str(), "F0AD4E0C3A1B");
///
/// assert!(Gateway::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gateway(String);

impl Gateway {
    /// Creates a gateway identifier.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::EmptyGateway` if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValueError::EmptyGateway);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Gateway {
    type Error = ValueError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Gateway> for String {
    fn from(gw: Gateway) -> Self {
        gw.0
    }
}

impl AsRef<str> for Gateway {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_trims_whitespace() {
        let gw = Gateway::new(" ABC123 ").unwrap();
        assert_eq!(gw.as_str(), "ABC123");
        assert_eq!(gw.to_string(), "ABC123");
    }

    #[test]
    fn gateway_rejects_empty() {
        assert_eq!(Gateway::new(""), Err(ValueError::EmptyGateway));
    }

    #[test]
    fn gateway_deserializes_from_string() {
        let gw: Gateway = serde_json::from_str("\"ABC123\"").unwrap();
        assert_eq!(gw.as_str(), "ABC123");
        assert_eq!(serde_json::to_string(&gw).unwrap(), "\"ABC123\"");
    }

    #[test]
    fn gateway_deserialize_validates() {
        assert!(serde_json::from_str::<Gateway>("\"\"").is_err());
        assert!(serde_json::from_str::<Gateway>("\"   \"").is_err());

        let gw: Gateway = serde_json::from_str("\"  ABC  \"").unwrap();
        assert_eq!(gw.as_str(), "ABC");
    }
}
