// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Access to the Ariston NET cloud API.
//!
//! [`GatewayApi`] is the seam between the devices and the transport. The
//! library ships [`HttpClient`], a `reqwest` implementation talking to the
//! real service; tests and host applications can provide their own.

#[cfg(feature = "http")]
mod http;
mod payload;

#[cfg(feature = "http")]
pub use http::{ApiConfig, HttpClient};
pub use payload::{
    AppInfo, LoginRequest, LoginResponse, ModeChange, SettingChange, TemperatureChange,
};

use crate::error::Error;
use crate::state::{PlantData, PlantSettings};
use crate::types::{
    ConsumptionSequence, ConsumptionUsage, DeviceInfo, Gateway, LydosPlantMode, SeSetting,
};

/// Operations of the cloud API used by Velis plants.
///
/// Every call is a single request. Implementations must not retry; errors are
/// handed to the caller as they are.
#[allow(async_fn_in_trait)]
pub trait GatewayApi {
    /// Lists the Velis plants registered on the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    async fn get_velis_devices(&self) -> Result<Vec<DeviceInfo>, Error>;

    /// Fetches the runtime data of a plant.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    async fn get_se_plant_data(&self, gw: &Gateway) -> Result<PlantData, Error>;

    /// Fetches the settings of a plant.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    async fn get_se_plant_settings(&self, gw: &Gateway) -> Result<PlantSettings, Error>;

    /// Fetches the energy report for the given usages.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    async fn get_consumptions_sequences(
        &self,
        gw: &Gateway,
        usages: &[ConsumptionUsage],
    ) -> Result<Vec<ConsumptionSequence>, Error>;

    /// Changes the operation mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    async fn set_lydos_mode(&self, gw: &Gateway, mode: LydosPlantMode) -> Result<(), Error>;

    /// Changes the requested water temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    async fn set_lydos_temperature(&self, gw: &Gateway, temperature: f64) -> Result<(), Error>;

    /// Switches the plant on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    async fn set_lydos_power(&self, gw: &Gateway, on: bool) -> Result<(), Error>;

    /// Changes one plant setting.
    ///
    /// The server expects the previous value next to the new one.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    async fn set_lydos_plant_setting(
        &self,
        gw: &Gateway,
        setting: SeSetting,
        value: f64,
        old_value: Option<f64>,
    ) -> Result<(), Error>;
}
