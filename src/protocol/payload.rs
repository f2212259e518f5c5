// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request and response bodies of the cloud API.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::types::{LydosPlantMode, SeSetting, SnapshotKey};

/// Body of `accounts/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account e-mail.
    pub usr: String,
    /// Account password.
    pub pwd: String,
    /// Impersonation flag, always `false` for end users.
    pub imp: bool,
    /// Opt out of usage tracking.
    pub not_track: bool,
    /// Identification of the calling application.
    pub app_info: AppInfo,
}

impl LoginRequest {
    /// Creates a login body for the given account.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            usr: username.into(),
            pwd: password.into(),
            imp: false,
            not_track: true,
            app_info: AppInfo::default(),
        }
    }
}

/// Application descriptor sent with a login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    /// Client operating system code.
    pub os_type: u8,
    /// Client application version.
    pub app_ver: String,
    /// Client application identifier.
    pub app_id: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            os_type: 2,
            app_ver: "5.6.7772.40151".to_string(),
            app_id: "com.remotethermo.aristonnet".to_string(),
        }
    }
}

/// Body returned by `accounts/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session token, absent when the login was refused.
    #[serde(default)]
    pub token: Option<String>,
}

/// Body of a mode change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeChange {
    /// New mode value.
    pub new: u8,
    /// Previous mode value; the server accepts `null`.
    pub old: Option<u8>,
}

impl From<LydosPlantMode> for ModeChange {
    fn from(mode: LydosPlantMode) -> Self {
        Self {
            new: mode.value(),
            old: None,
        }
    }
}

/// Body of a temperature change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TemperatureChange {
    /// Eco flag; the hybrid always sends `false`.
    pub eco: bool,
    /// New requested temperature.
    pub new: f64,
    /// Previous temperature; the server accepts `null`.
    pub old: Option<f64>,
}

impl TemperatureChange {
    /// Creates a change request for the given temperature.
    #[must_use]
    pub fn new(temperature: f64) -> Self {
        Self {
            eco: false,
            new: temperature,
            old: None,
        }
    }
}

/// Body of a plant setting change.
///
/// Serializes as `{"<setting>": {"new": .., "old": ..}}`.
///
/// # Examples
///
/// ```
/// use lydos_lib::protocol::SettingChange;
/// use lydos_lib::types::SeSetting;
///
/// let change = SettingChange {
///     setting: SeSetting::MaxSetpointTemperature,
///     new: 70.0,
///     old: Some(65.0),
/// };
/// let json = serde_json::to_value(&change).unwrap();
/// assert_eq!(json["SeMaxSetpointTemperature"]["new"], 70.0);
/// assert_eq!(json["SeMaxSetpointTemperature"]["old"], 65.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingChange {
    /// Setting being changed.
    pub setting: SeSetting,
    /// New value.
    pub new: f64,
    /// Previous value.
    pub old: Option<f64>,
}

#[derive(Serialize)]
struct Diff {
    new: f64,
    old: Option<f64>,
}

impl Serialize for SettingChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            self.setting.as_str(),
            &Diff {
                new: self.new,
                old: self.old,
            },
        )?;
        map.end()
    }
}
