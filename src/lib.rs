// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Lydos` Lib - A Rust library to control Ariston Lydos Hybrid water heaters.
//!
//! The library mirrors the state of a heat pump water heater as reported by
//! the Ariston NET cloud API and sends changes back through the same API.
//!
//! # Supported Features
//!
//! - **State**: operation mode, requested and measured temperature, power
//! - **Settings**: anti-legionella cycle, maximum setpoint and its bounds
//! - **Energy**: heat pump electricity used for hot water
//! - **Both call styles**: async [`LydosHybridDevice`] and
//!   [`blocking::LydosHybridDevice`]
//!
//! # Quick Start
//!
//! ## Async
//!
//! ```no_run
//! use lydos_lib::protocol::{ApiConfig, GatewayApi};
//! use lydos_lib::LydosHybridDevice;
//!
//! #[tokio::main]
//! async fn main() -> lydos_lib::Result<()> {
//!     let client = ApiConfig::new()
//!         .with_credentials("me@example.com", "secret")
//!         .into_client()?;
//!
//!     // Pick the first Lydos Hybrid on the account
//!     let plants = client.get_velis_devices().await?;
//!     let Some(info) = plants.into_iter().find(|p| p.is_lydos_hybrid()) else {
//!         return Ok(());
//!     };
//!
//!     let device = LydosHybridDevice::from_device_info(client, info)
//!         .build()
//!         .await?;
//!
//!     device.set_water_heater_temperature(55.0).await?;
//!     assert_eq!(device.water_heater_target_temperature(), Some(55.0));
//!     Ok(())
//! }
//! ```
//!
//! ## Blocking
//!
//! ```no_run
//! use lydos_lib::blocking::LydosHybridDevice;
//! use lydos_lib::protocol::ApiConfig;
//! use lydos_lib::types::Gateway;
//!
//! fn main() -> lydos_lib::Result<()> {
//!     let config = ApiConfig::new().with_credentials("me@example.com", "secret");
//!     let device = LydosHybridDevice::http(config, Gateway::new("F0AD4E0C3A1B")?)?.build()?;
//!
//!     device.update_energy()?;
//!     println!(
//!         "last two hours: {:?} kWh",
//!         device.electric_consumption_for_water_last_two_hours()
//!     );
//!     Ok(())
//! }
//! ```

pub mod blocking;
mod device;
pub mod error;
pub mod protocol;
pub mod state;
#[cfg(test)]
mod testing;
pub mod types;

pub use device::{LydosHybridDevice, LydosHybridDeviceBuilder};
pub use error::{DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{ApiConfig, HttpClient};
pub use protocol::GatewayApi;
pub use state::{DeviceState, PlantData, PlantSettings};
pub use types::{DeviceInfo, Gateway, LydosPlantMode, SeSetting, VelisProperty};
