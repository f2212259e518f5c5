// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! [`DeviceState`] holds the last values fetched from the cloud: plant data,
//! plant settings and the energy report. Plant data and settings are
//! [`Snapshot`]s keyed by the typed keys in [`crate::types`].
//!
//! # Examples
//!
//! ```
//! use lydos_lib::state::DeviceState;
//! use lydos_lib::types::SeSetting;
//!
//! let mut state = DeviceState::new();
//! state
//!     .plant_settings_mut()
//!     .insert(SeSetting::MaxSetpointTemperature, 65.0);
//!
//! assert_eq!(
//!     state.plant_settings().get_f64(SeSetting::MaxSetpointTemperature),
//!     Some(65.0)
//! );
//! ```

mod device_state;
mod snapshot;

pub use device_state::DeviceState;
pub use snapshot::{PlantData, PlantSettings, Snapshot};
