// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identity of a plant registered on the account.

use serde::{Deserialize, Serialize};

use super::Gateway;

/// Identity of a Velis plant as listed by `velis/plants`.
///
/// # Examples
///
/// ```
/// use lydos_lib::types::DeviceInfo;
///
/// let json = r#"{"gw": "F0AD4E0C3A1B", "name": "Garage", "sn": "123", "wheType": 2}"#;
/// let info: DeviceInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(info.gw.as_str(), "F0AD4E0C3A1B");
/// assert!(info.is_lydos_hybrid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// Gateway identifier.
    pub gw: Gateway,
    /// User-given plant name.
    #[serde(default)]
    pub name: Option<String>,
    /// Serial number.
    #[serde(default)]
    pub sn: Option<String>,
    /// Water heater family code.
    #[serde(default)]
    pub whe_type: Option<i32>,
}

impl DeviceInfo {
    /// Water heater family code of a Lydos Hybrid.
    pub const LYDOS_HYBRID_WHE_TYPE: i32 = 2;

    /// Creates an identity holding only a gateway.
    #[must_use]
    pub fn new(gw: Gateway) -> Self {
        Self {
            gw,
            name: None,
            sn: None,
            whe_type: None,
        }
    }

    /// Returns `true` if the plant reports itself as a Lydos Hybrid.
    #[must_use]
    pub fn is_lydos_hybrid(&self) -> bool {
        self.whe_type == Some(Self::LYDOS_HYBRID_WHE_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_to_none() {
        let info: DeviceInfo = serde_json::from_str(r#"{"gw": "ABC"}"#).unwrap();
        assert_eq!(info, DeviceInfo::new(Gateway::new("ABC").unwrap()));
        assert!(!info.is_lydos_hybrid());
    }

    #[test]
    fn other_families_are_not_hybrid() {
        let info: DeviceInfo = serde_json::from_str(r#"{"gw": "ABC", "wheType": 1}"#).unwrap();
        assert!(!info.is_lydos_hybrid());
    }

    #[test]
    fn blank_gateway_is_rejected() {
        assert!(serde_json::from_str::<DeviceInfo>(r#"{"gw": "   "}"#).is_err());

        let info: DeviceInfo = serde_json::from_str(r#"{"gw": " ABC "}"#).unwrap();
        assert_eq!(info.gw.as_str(), "ABC");
    }
}
