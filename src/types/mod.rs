// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Lydos Hybrid control.
//!
//! # Types
//!
//! - [`Gateway`] - Identifier of a plant in the cloud API
//! - [`DeviceInfo`] - Plant identity as listed for the account
//! - [`LydosPlantMode`] - Operation modes (iMemory, Green, Program, Boost)
//! - [`VelisProperty`] / [`SeSetting`] - Keys of plant data and plant settings
//! - [`ConsumptionSequence`] - One series of an energy report

mod consumption;
mod device_info;
mod gateway;
mod keys;
mod mode;

pub use consumption::{
    ConsumptionSequence, ConsumptionTimeInterval, ConsumptionType, ConsumptionUsage,
};
pub use device_info::DeviceInfo;
pub use gateway::Gateway;
pub use keys::{SeSetting, SnapshotKey, VelisProperty};
pub use mode::LydosPlantMode;
