// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Energy consumption report types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of energy a consumption sequence measures.
///
/// Only the kinds a Lydos Hybrid reports are listed; other values in a
/// report are kept as raw numbers in [`ConsumptionSequence::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumptionType {
    /// Total energy used for domestic hot water.
    DomesticHotWaterTotalEnergy,
    /// Electricity used by the heat pump for domestic hot water.
    DomesticHotWaterHeatingPumpElectricity,
    /// Electricity used by the backup resistor for domestic hot water.
    DomesticHotWaterResistorElectricity,
}

impl ConsumptionType {
    /// Returns the numeric code used in the `k` field of a sequence.
    #[must_use]
    pub const fn value(&self) -> u32 {
        match self {
            Self::DomesticHotWaterTotalEnergy => 2,
            Self::DomesticHotWaterHeatingPumpElectricity => 9,
            Self::DomesticHotWaterResistorElectricity => 10,
        }
    }
}

/// Period covered by a consumption sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumptionTimeInterval {
    /// Last 24 hours, one value per two hours.
    LastDay,
    /// Last 7 days.
    LastWeek,
    /// Last month.
    LastMonth,
    /// Last 12 months.
    LastYear,
}

impl ConsumptionTimeInterval {
    /// Returns the numeric code used in the `p` field of a sequence.
    #[must_use]
    pub const fn value(&self) -> u32 {
        match self {
            Self::LastDay => 1,
            Self::LastWeek => 2,
            Self::LastMonth => 3,
            Self::LastYear => 4,
        }
    }
}

/// Usage filter of the consumption report endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumptionUsage {
    /// Heat pump electricity for domestic hot water.
    DhwHeatingPumpElec,
    /// Resistor electricity for domestic hot water.
    DhwResistorElec,
}

impl ConsumptionUsage {
    /// Usages requested for a Lydos Hybrid.
    pub const LYDOS_HYBRID: [Self; 2] = [Self::DhwHeatingPumpElec, Self::DhwResistorElec];

    /// Returns the name used in the `usages` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DhwHeatingPumpElec => "DhwHeatingPumpElec",
            Self::DhwResistorElec => "DhwResistorElec",
        }
    }
}

impl fmt::Display for ConsumptionUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One series of a consumption report.
///
/// # Examples
///
/// ```
/// use lydos_lib::types::{ConsumptionSequence, ConsumptionTimeInterval, ConsumptionType};
///
/// let json = r#"{"k": 9, "p": 1, "v": [0.0, 0.2, 0.4]}"#;
/// let seq: ConsumptionSequence = serde_json::from_str(json).unwrap();
/// assert!(seq.matches(
///     ConsumptionType::DomesticHotWaterHeatingPumpElectricity,
///     ConsumptionTimeInterval::LastDay,
/// ));
/// assert_eq!(seq.last_value(), Some(0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionSequence {
    /// Consumption type code.
    #[serde(rename = "k")]
    pub kind: u32,
    /// Time interval code.
    #[serde(rename = "p")]
    pub period: u32,
    /// Values, oldest first.
    #[serde(rename = "v", default)]
    pub values: Vec<f64>,
}

impl ConsumptionSequence {
    /// Returns `true` if this sequence holds the given type over the given period.
    #[must_use]
    pub fn matches(&self, kind: ConsumptionType, period: ConsumptionTimeInterval) -> bool {
        self.kind == kind.value() && self.period == period.value()
    }

    /// Returns the most recent value.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_without_values() {
        let seq: ConsumptionSequence = serde_json::from_str(r#"{"k": 10, "p": 2}"#).unwrap();
        assert!(seq.values.is_empty());
        assert_eq!(seq.last_value(), None);
        assert!(seq.matches(
            ConsumptionType::DomesticHotWaterResistorElectricity,
            ConsumptionTimeInterval::LastWeek
        ));
    }

    #[test]
    fn sequence_ignores_extra_fields() {
        let json = r#"{"k": 2, "p": 4, "v": [1.5], "l": "kWh"}"#;
        let seq: ConsumptionSequence = serde_json::from_str(json).unwrap();
        assert_eq!(seq.kind, 2);
        assert_eq!(seq.last_value(), Some(1.5));
    }

    #[test]
    fn usage_names() {
        let names: Vec<&str> = ConsumptionUsage::LYDOS_HYBRID
            .iter()
            .map(ConsumptionUsage::as_str)
            .collect();
        assert_eq!(names, ["DhwHeatingPumpElec", "DhwResistorElec"]);
    }
}
