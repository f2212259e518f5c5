// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blocking device API.
//!
//! [`LydosHybridDevice`] offers the same operations as the async
//! [`crate::LydosHybridDevice`] and ends in the same state. It owns a
//! current-thread tokio runtime and waits on each request. Do not use it from
//! inside an async runtime: `block_on` panics there.
//!
//! ```no_run
//! use lydos_lib::blocking::LydosHybridDevice;
//! use lydos_lib::protocol::ApiConfig;
//! use lydos_lib::types::Gateway;
//!
//! # fn example() -> lydos_lib::Result<()> {
//! let config = ApiConfig::new().with_credentials("me@example.com", "secret");
//! let device = LydosHybridDevice::http(config, Gateway::new("F0AD4E0C3A1B")?)?.build()?;
//!
//! device.set_power(true)?;
//! assert_eq!(device.water_heater_power_value(), Some(true));
//! # Ok(())
//! # }
//! ```

use tokio::runtime::{Builder, Runtime};

use crate::device;
use crate::error::{Error, ProtocolError};
use crate::protocol::GatewayApi;
#[cfg(feature = "http")]
use crate::protocol::{ApiConfig, HttpClient};
use crate::state::DeviceState;
use crate::types::{DeviceInfo, Gateway, LydosPlantMode};

fn new_runtime() -> Result<Runtime, ProtocolError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ProtocolError::Runtime)
}

/// Builder for the blocking [`LydosHybridDevice`].
#[derive(Debug)]
pub struct LydosHybridDeviceBuilder<A: GatewayApi> {
    inner: device::LydosHybridDeviceBuilder<A>,
}

impl<A: GatewayApi> LydosHybridDeviceBuilder<A> {
    /// Sets the plant name shown to users.
    #[must_use]
    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_name(name),
        }
    }

    /// Builds the device and fetches its plant data and settings.
    ///
    /// # Errors
    ///
    /// Returns error if the runtime cannot be created or a request fails.
    pub fn build(self) -> Result<LydosHybridDevice<A>, Error> {
        let runtime = new_runtime()?;
        let inner = runtime.block_on(self.inner.build())?;
        Ok(LydosHybridDevice { inner, runtime })
    }

    /// Builds the device without any request.
    ///
    /// # Errors
    ///
    /// Returns error if the runtime cannot be created.
    pub fn build_without_fetch(self) -> Result<LydosHybridDevice<A>, Error> {
        let runtime = new_runtime()?;
        Ok(LydosHybridDevice {
            inner: self.inner.build_without_fetch(),
            runtime,
        })
    }
}

/// A Lydos Hybrid water heater with blocking calls.
#[derive(Debug)]
pub struct LydosHybridDevice<A: GatewayApi> {
    inner: device::LydosHybridDevice<A>,
    runtime: Runtime,
}

impl<A: GatewayApi> LydosHybridDevice<A> {
    /// Starts building a device for the given gateway.
    pub fn builder(api: A, gateway: Gateway) -> LydosHybridDeviceBuilder<A> {
        LydosHybridDeviceBuilder {
            inner: device::LydosHybridDevice::builder(api, gateway),
        }
    }

    /// Starts building a device from a plant listing entry.
    pub fn from_device_info(api: A, info: DeviceInfo) -> LydosHybridDeviceBuilder<A> {
        LydosHybridDeviceBuilder {
            inner: device::LydosHybridDevice::from_device_info(api, info),
        }
    }

    /// Returns the async device this one drives.
    #[must_use]
    pub fn as_async(&self) -> &device::LydosHybridDevice<A> {
        &self.inner
    }

    /// Returns the gateway identifier.
    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        self.inner.gateway()
    }

    /// Returns the plant identity.
    #[must_use]
    pub fn info(&self) -> &DeviceInfo {
        self.inner.info()
    }

    /// Returns the underlying API client.
    #[must_use]
    pub fn api(&self) -> &A {
        self.inner.api()
    }

    /// Returns a snapshot of the mirrored state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.inner.state()
    }

    /// Replaces the plant data with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn update_state(&self) -> Result<(), Error> {
        self.runtime.block_on(self.inner.update_state())
    }

    /// Replaces the plant settings with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn update_settings(&self) -> Result<(), Error> {
        self.runtime.block_on(self.inner.update_settings())
    }

    /// Replaces the energy report with the server's.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn update_energy(&self) -> Result<(), Error> {
        self.runtime.block_on(self.inner.update_energy())
    }

    /// Names of the operation modes.
    #[must_use]
    pub fn water_heater_mode_operation_texts(&self) -> Vec<&'static str> {
        self.inner.water_heater_mode_operation_texts()
    }

    /// Numeric values of the operation modes.
    #[must_use]
    pub fn water_heater_mode_options(&self) -> Vec<u8> {
        self.inner.water_heater_mode_options()
    }

    /// Raw value of the current mode.
    #[must_use]
    pub fn water_heater_mode_value(&self) -> Option<u8> {
        self.inner.water_heater_mode_value()
    }

    /// Current mode.
    #[must_use]
    pub fn water_heater_mode(&self) -> Option<LydosPlantMode> {
        self.inner.water_heater_mode()
    }

    /// Name of the current mode.
    #[must_use]
    pub fn water_heater_current_mode_text(&self) -> Option<&'static str> {
        self.inner.water_heater_current_mode_text()
    }

    /// Measured water temperature.
    #[must_use]
    pub fn water_heater_current_temperature(&self) -> Option<f64> {
        self.inner.water_heater_current_temperature()
    }

    /// Requested water temperature.
    #[must_use]
    pub fn water_heater_target_temperature(&self) -> Option<f64> {
        self.inner.water_heater_target_temperature()
    }

    /// Power switch position.
    #[must_use]
    pub fn water_heater_power_value(&self) -> Option<bool> {
        self.inner.water_heater_power_value()
    }

    /// Whether the plant is heating right now.
    #[must_use]
    pub fn is_heating(&self) -> Option<bool> {
        self.inner.is_heating()
    }

    /// Whether the anti-legionella cycle is enabled.
    #[must_use]
    pub fn water_anti_leg_value(&self) -> Option<bool> {
        self.inner.water_anti_leg_value()
    }

    /// Lowest value the maximum setpoint may take.
    #[must_use]
    pub fn water_heater_maximum_setpoint_temperature_minimum(&self) -> Option<f64> {
        self.inner
            .water_heater_maximum_setpoint_temperature_minimum()
    }

    /// Highest value the maximum setpoint may take.
    #[must_use]
    pub fn water_heater_maximum_setpoint_temperature_maximum(&self) -> Option<f64> {
        self.inner
            .water_heater_maximum_setpoint_temperature_maximum()
    }

    /// Maximum temperature a user may request.
    #[must_use]
    pub fn water_heater_maximum_setpoint_temperature(&self) -> Option<f64> {
        self.inner.water_heater_maximum_setpoint_temperature()
    }

    /// Heat pump electricity used for hot water in the latest two-hour slot.
    #[must_use]
    pub fn electric_consumption_for_water_last_two_hours(&self) -> Option<f64> {
        self.inner.electric_consumption_for_water_last_two_hours()
    }

    /// Enables or disables the anti-legionella cycle.
    ///
    /// # Errors
    ///
    /// Returns error if the settings were never fetched or the request fails.
    pub fn set_antilegionella(&self, anti_leg: bool) -> Result<(), Error> {
        self.runtime
            .block_on(self.inner.set_antilegionella(anti_leg))
    }

    /// Changes the operation mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn set_water_heater_operation_mode(&self, mode: LydosPlantMode) -> Result<(), Error> {
        self.runtime
            .block_on(self.inner.set_water_heater_operation_mode(mode))
    }

    /// Changes the requested water temperature.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn set_water_heater_temperature(&self, temperature: f64) -> Result<(), Error> {
        self.runtime
            .block_on(self.inner.set_water_heater_temperature(temperature))
    }

    /// Switches the water heater on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub fn set_power(&self, power: bool) -> Result<(), Error> {
        self.runtime.block_on(self.inner.set_power(power))
    }

    /// Changes the maximum temperature a user may request.
    ///
    /// # Errors
    ///
    /// Returns error if the settings were never fetched or the request fails.
    pub fn set_max_setpoint_temp(&self, max_setpoint_temp: f64) -> Result<(), Error> {
        self.runtime
            .block_on(self.inner.set_max_setpoint_temp(max_setpoint_temp))
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
