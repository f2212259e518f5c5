// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::types::{ConsumptionSequence, ConsumptionTimeInterval, ConsumptionType};

use super::{PlantData, PlantSettings};

/// Last known state of a Lydos Hybrid plant.
///
/// Each part is replaced wholesale by the matching refresh call and patched
/// in place by the setters after the server accepted a change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceState {
    data: PlantData,
    plant_settings: PlantSettings,
    consumption_sequences: Vec<ConsumptionSequence>,
}

impl DeviceState {
    /// Creates an empty device state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime plant data.
    #[must_use]
    pub fn data(&self) -> &PlantData {
        &self.data
    }

    /// Mutable runtime plant data.
    pub fn data_mut(&mut self) -> &mut PlantData {
        &mut self.data
    }

    /// Replaces the runtime plant data.
    pub fn set_data(&mut self, data: PlantData) {
        self.data = data;
    }

    /// Plant settings.
    #[must_use]
    pub fn plant_settings(&self) -> &PlantSettings {
        &self.plant_settings
    }

    /// Mutable plant settings.
    pub fn plant_settings_mut(&mut self) -> &mut PlantSettings {
        &mut self.plant_settings
    }

    /// Replaces the plant settings.
    pub fn set_plant_settings(&mut self, settings: PlantSettings) {
        self.plant_settings = settings;
    }

    /// Last fetched consumption report.
    #[must_use]
    pub fn consumption_sequences(&self) -> &[ConsumptionSequence] {
        &self.consumption_sequences
    }

    /// Replaces the consumption report.
    pub fn set_consumption_sequences(&mut self, sequences: Vec<ConsumptionSequence>) {
        self.consumption_sequences = sequences;
    }

    /// Returns the most recent value of the first matching sequence.
    #[must_use]
    pub fn consumption_last_value(
        &self,
        kind: ConsumptionType,
        period: ConsumptionTimeInterval,
    ) -> Option<f64> {
        self.consumption_sequences
            .iter()
            .find(|seq| seq.matches(kind, period))
            .and_then(ConsumptionSequence::last_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VelisProperty;

    fn sequence(kind: u32, period: u32, values: &[f64]) -> ConsumptionSequence {
        ConsumptionSequence {
            kind,
            period,
            values: values.to_vec(),
        }
    }

    #[test]
    fn new_state_is_empty() {
        let state = DeviceState::new();
        assert!(state.data().is_empty());
        assert!(state.plant_settings().is_empty());
        assert!(state.consumption_sequences().is_empty());
    }

    #[test]
    fn data_mut_patches_in_place() {
        let mut state = DeviceState::new();
        state.data_mut().insert(VelisProperty::On, true);
        assert_eq!(state.data().get_bool(VelisProperty::On), Some(true));
    }

    #[test]
    fn consumption_last_value_picks_matching_sequence() {
        let mut state = DeviceState::new();
        state.set_consumption_sequences(vec![
            sequence(10, 1, &[5.0, 6.0]),
            sequence(9, 2, &[7.0]),
            sequence(9, 1, &[0.1, 0.3]),
        ]);

        assert_eq!(
            state.consumption_last_value(
                ConsumptionType::DomesticHotWaterHeatingPumpElectricity,
                ConsumptionTimeInterval::LastDay
            ),
            Some(0.3)
        );
        assert_eq!(
            state.consumption_last_value(
                ConsumptionType::DomesticHotWaterTotalEnergy,
                ConsumptionTimeInterval::LastDay
            ),
            None
        );
    }

    #[test]
    fn consumption_last_value_of_empty_sequence() {
        let mut state = DeviceState::new();
        state.set_consumption_sequences(vec![sequence(9, 1, &[])]);
        assert_eq!(
            state.consumption_last_value(
                ConsumptionType::DomesticHotWaterHeatingPumpElectricity,
                ConsumptionTimeInterval::LastDay
            ),
            None
        );
    }
}
