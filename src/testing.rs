// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory gateway API for unit tests.

use parking_lot::Mutex;

use crate::error::{Error, ProtocolError};
use crate::protocol::GatewayApi;
use crate::state::{PlantData, PlantSettings};
use crate::types::{
    ConsumptionSequence, ConsumptionUsage, DeviceInfo, Gateway, LydosPlantMode, SeSetting,
};

/// A request received by [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Devices,
    PlantData(Gateway),
    PlantSettings(Gateway),
    Consumptions(Gateway, Vec<ConsumptionUsage>),
    Mode(Gateway, LydosPlantMode),
    Temperature(Gateway, f64),
    Power(Gateway, bool),
    Setting {
        gw: Gateway,
        setting: SeSetting,
        value: f64,
        old: Option<f64>,
    },
}

/// Answers reads with canned values and records every call.
#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub(crate) devices: Vec<DeviceInfo>,
    pub(crate) data: PlantData,
    pub(crate) settings: PlantSettings,
    pub(crate) sequences: Vec<ConsumptionSequence>,
    pub(crate) fail_writes: bool,
    pub(crate) calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn write(&self, call: Call) -> Result<(), Error> {
        self.record(call);
        if self.fail_writes {
            return Err(ProtocolError::ConnectionFailed(
                "HTTP 500 - Internal Server Error".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

impl GatewayApi for FakeApi {
    async fn get_velis_devices(&self) -> Result<Vec<DeviceInfo>, Error> {
        self.record(Call::Devices);
        Ok(self.devices.clone())
    }

    async fn get_se_plant_data(&self, gw: &Gateway) -> Result<PlantData, Error> {
        self.record(Call::PlantData(gw.clone()));
        Ok(self.data.clone())
    }

    async fn get_se_plant_settings(&self, gw: &Gateway) -> Result<PlantSettings, Error> {
        self.record(Call::PlantSettings(gw.clone()));
        Ok(self.settings.clone())
    }

    async fn get_consumptions_sequences(
        &self,
        gw: &Gateway,
        usages: &[ConsumptionUsage],
    ) -> Result<Vec<ConsumptionSequence>, Error> {
        self.record(Call::Consumptions(gw.clone(), usages.to_vec()));
        Ok(self.sequences.clone())
    }

    async fn set_lydos_mode(&self, gw: &Gateway, mode: LydosPlantMode) -> Result<(), Error> {
        self.write(Call::Mode(gw.clone(), mode))
    }

    async fn set_lydos_temperature(&self, gw: &Gateway, temperature: f64) -> Result<(), Error> {
        self.write(Call::Temperature(gw.clone(), temperature))
    }

    async fn set_lydos_power(&self, gw: &Gateway, on: bool) -> Result<(), Error> {
        self.write(Call::Power(gw.clone(), on))
    }

    async fn set_lydos_plant_setting(
        &self,
        gw: &Gateway,
        setting: SeSetting,
        value: f64,
        old_value: Option<f64>,
    ) -> Result<(), Error> {
        self.write(Call::Setting {
            gw: gw.clone(),
            setting,
            value,
            old: old_value,
        })
    }
}
