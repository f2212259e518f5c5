// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level device abstraction for Lydos Hybrid water heaters.
//!
//! A [`LydosHybridDevice`] mirrors the last state fetched from the cloud and
//! pushes changes back through a [`GatewayApi`]. Getters only read the local
//! mirror. Setters send one request and, once the server accepted it, write
//! the sent value into the mirror without fetching it again.
//!
//! ```no_run
//! use lydos_lib::protocol::ApiConfig;
//! use lydos_lib::types::{Gateway, LydosPlantMode};
//! use lydos_lib::LydosHybridDevice;
//!
//! # async fn example() -> lydos_lib::Result<()> {
//! let config = ApiConfig::new().with_credentials("me@example.com", "secret");
//! let device = LydosHybridDevice::http(config, Gateway::new("F0AD4E0C3A1B")?)?
//!     .build()
//!     .await?;
//!
//! println!("max setpoint: {:?}", device.water_heater_maximum_setpoint_temperature());
//! device.set_water_heater_operation_mode(LydosPlantMode::Green).await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::LydosHybridDeviceBuilder;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{DeviceError, Error};
use crate::protocol::GatewayApi;
#[cfg(feature = "http")]
use crate::protocol::{ApiConfig, HttpClient};
use crate::state::{DeviceState, PlantSettings};
use crate::types::{
    ConsumptionTimeInterval, ConsumptionType, ConsumptionUsage, DeviceInfo, Gateway,
    LydosPlantMode, SeSetting, SnapshotKey, VelisProperty,
};

/// A Lydos Hybrid water heater reached through the cloud API.
///
/// All methods take `&self`; the mirrored state sits behind a lock that is
/// never held across a request.
#[derive(Debug)]
pub struct LydosHybridDevice<A: GatewayApi> {
    api: Arc<A>,
    info: DeviceInfo,
    state: Arc<RwLock<DeviceState>>,
}

impl<A: GatewayApi> LydosHybridDevice<A> {
    /// Starts building a device for the given gateway.
    pub fn builder(api: A, gateway: Gateway) -> LydosHybridDeviceBuilder<A> {
        LydosHybridDeviceBuilder::new(api, DeviceInfo::new(gateway))
    }

    /// Starts building a device from an entry of
    /// [`GatewayApi::get_velis_devices`].
    pub fn from_device_info(api: A, info: DeviceInfo) -> LydosHybridDeviceBuilder<A> {
        LydosHybridDeviceBuilder::new(api, info)
    }

    pub(crate) fn new(api: A, info: DeviceInfo) -> Self {
        Self {
            api: Arc::new(api),
            info,
            state: Arc::new(RwLock::new(DeviceState::new())),
        }
    }

    /// Returns the gateway identifier.
    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.info.gw
    }

    /// Returns the plant identity.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Returns the plant name if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    /// Returns the underlying API client.
    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns a snapshot of the mirrored state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state.read().clone()
    }

    // ========== Refresh ==========

    /// Replaces the plant data with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn update_state(&self) -> Result<(), Error> {
        let data = self.api.get_se_plant_data(self.gateway()).await?;
        self.state.write().set_data(data);
        Ok(())
    }

    /// Replaces the plant settings with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn update_settings(&self) -> Result<(), Error> {
        let settings = self.api.get_se_plant_settings(self.gateway()).await?;
        self.state.write().set_plant_settings(settings);
        Ok(())
    }

    /// Replaces the energy report with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn update_energy(&self) -> Result<(), Error> {
        let sequences = self
            .api
            .get_consumptions_sequences(self.gateway(), &ConsumptionUsage::LYDOS_HYBRID)
            .await?;
        self.state.write().set_consumption_sequences(sequences);
        Ok(())
    }

    // ========== Modes ==========

    /// Names of the operation modes, in the order of
    /// [`water_heater_mode_options`](Self::water_heater_mode_options).
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn water_heater_mode_operation_texts(&self) -> Vec<&'static str> {
        LydosPlantMode::ALL.iter().map(LydosPlantMode::as_str).collect()
    }

    /// Numeric values of the operation modes.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn water_heater_mode_options(&self) -> Vec<u8> {
        LydosPlantMode::ALL.iter().map(LydosPlantMode::value).collect()
    }

    /// Raw value of the current mode.
    #[must_use]
    pub fn water_heater_mode_value(&self) -> Option<u8> {
        self.state.read().data().get_u8(VelisProperty::Mode)
    }

    /// Current mode, if it is one the library knows.
    #[must_use]
    pub fn water_heater_mode(&self) -> Option<LydosPlantMode> {
        self.water_heater_mode_value()
            .and_then(LydosPlantMode::from_value)
    }

    /// Name of the current mode.
    #[must_use]
    pub fn water_heater_current_mode_text(&self) -> Option<&'static str> {
        self.water_heater_mode().map(|mode| mode.as_str())
    }

    // ========== Plant data ==========

    /// Measured water temperature.
    #[must_use]
    pub fn water_heater_current_temperature(&self) -> Option<f64> {
        self.state.read().data().get_f64(VelisProperty::Temp)
    }

    /// Requested water temperature.
    #[must_use]
    pub fn water_heater_target_temperature(&self) -> Option<f64> {
        self.state.read().data().get_f64(VelisProperty::ReqTemp)
    }

    /// Power switch position.
    #[must_use]
    pub fn water_heater_power_value(&self) -> Option<bool> {
        self.state.read().data().get_bool(VelisProperty::On)
    }

    /// Whether the plant is heating right now.
    #[must_use]
    pub fn is_heating(&self) -> Option<bool> {
        self.state.read().data().get_bool(VelisProperty::HeatReq)
    }

    // ========== Plant settings ==========

    /// Whether the periodic anti-legionella cycle is enabled.
    #[must_use]
    pub fn water_anti_leg_value(&self) -> Option<bool> {
        self.state
            .read()
            .plant_settings()
            .get_bool(SeSetting::AntilegionellaOnOff)
    }

    /// Lowest value the maximum setpoint may take.
    #[must_use]
    pub fn water_heater_maximum_setpoint_temperature_minimum(&self) -> Option<f64> {
        self.state
            .read()
            .plant_settings()
            .get_f64(SeSetting::MaxSetpointTemperatureMin)
    }

    /// Highest value the maximum setpoint may take.
    #[must_use]
    pub fn water_heater_maximum_setpoint_temperature_maximum(&self) -> Option<f64> {
        self.state
            .read()
            .plant_settings()
            .get_f64(SeSetting::MaxSetpointTemperatureMax)
    }

    /// Maximum temperature a user may request.
    #[must_use]
    pub fn water_heater_maximum_setpoint_temperature(&self) -> Option<f64> {
        self.state
            .read()
            .plant_settings()
            .get_f64(SeSetting::MaxSetpointTemperature)
    }

    // ========== Energy ==========

    /// Heat pump electricity used for hot water in the latest two-hour slot
    /// of the daily report.
    #[must_use]
    pub fn electric_consumption_for_water_last_two_hours(&self) -> Option<f64> {
        self.state.read().consumption_last_value(
            ConsumptionType::DomesticHotWaterHeatingPumpElectricity,
            ConsumptionTimeInterval::LastDay,
        )
    }

    // ========== Setters ==========

    /// Enables or disables the anti-legionella cycle.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::SettingNotLoaded` if the settings were never
    /// fetched, or the API error if the request fails.
    pub async fn set_antilegionella(&self, anti_leg: bool) -> Result<(), Error> {
        let key = SeSetting::AntilegionellaOnOff;
        let old = self.loaded_setting(key, |s| s.get_bool(key).unwrap_or(false))?;

        self.api
            .set_lydos_plant_setting(
                self.gateway(),
                key,
                flag_value(anti_leg),
                Some(flag_value(old)),
            )
            .await?;

        self.state.write().plant_settings_mut().insert(key, anti_leg);
        tracing::debug!(gw = %self.gateway(), anti_leg, "Anti-legionella updated");
        Ok(())
    }

    /// Changes the operation mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_water_heater_operation_mode(&self, mode: LydosPlantMode) -> Result<(), Error> {
        self.api.set_lydos_mode(self.gateway(), mode).await?;

        self.state
            .write()
            .data_mut()
            .insert(VelisProperty::Mode, mode.value());
        tracing::debug!(gw = %self.gateway(), %mode, "Operation mode updated");
        Ok(())
    }

    /// Changes the requested water temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_water_heater_temperature(&self, temperature: f64) -> Result<(), Error> {
        self.api
            .set_lydos_temperature(self.gateway(), temperature)
            .await?;

        self.state
            .write()
            .data_mut()
            .insert(VelisProperty::ReqTemp, temperature);
        tracing::debug!(gw = %self.gateway(), temperature, "Requested temperature updated");
        Ok(())
    }

    /// Switches the water heater on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_power(&self, power: bool) -> Result<(), Error> {
        self.api.set_lydos_power(self.gateway(), power).await?;

        self.state.write().data_mut().insert(VelisProperty::On, power);
        tracing::debug!(gw = %self.gateway(), power, "Power updated");
        Ok(())
    }

    /// Changes the maximum temperature a user may request.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::SettingNotLoaded` if the settings were never
    /// fetched, or the API error if the request fails.
    pub async fn set_max_setpoint_temp(&self, max_setpoint_temp: f64) -> Result<(), Error> {
        let key = SeSetting::MaxSetpointTemperature;
        let old = self.loaded_setting(key, |s| s.get_f64(key))?;

        self.api
            .set_lydos_plant_setting(self.gateway(), key, max_setpoint_temp, old)
            .await?;

        self.state
            .write()
            .plant_settings_mut()
            .insert(key, max_setpoint_temp);
        tracing::debug!(gw = %self.gateway(), max_setpoint_temp, "Maximum setpoint updated");
        Ok(())
    }

    /// Reads a cached setting that a diff-style update needs.
    fn loaded_setting<T>(
        &self,
        key: SeSetting,
        read: impl FnOnce(&PlantSettings) -> T,
    ) -> Result<T, Error> {
        let state = self.state.read();
        if !state.plant_settings().contains(key) {
            return Err(DeviceError::SettingNotLoaded(key.as_str()).into());
        }
        Ok(read(state.plant_settings()))
    }
}

#[cfg(feature = "http")]
impl LydosHybridDevice<HttpClient> {
    /// Starts building a device backed by the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(
        config: ApiConfig,
        gateway: Gateway,
    ) -> Result<LydosHybridDeviceBuilder<HttpClient>, Error> {
        let client = config.into_client()?;
        Ok(Self::builder(client, gateway))
    }
}

fn flag_value(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}
