// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property and setting keys of the Velis plant API.
//!
//! The cloud API returns plant data and plant settings as flat JSON objects.
//! These enums name the fields the library understands; anything else in a
//! response is ignored.

use std::fmt;
use std::hash::Hash;

/// A key of a [`Snapshot`](crate::state::Snapshot).
pub trait SnapshotKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every known key.
    const ALL: &'static [Self];

    /// Returns the JSON field name of this key.
    fn as_str(&self) -> &'static str;

    /// Looks up a key by its JSON field name.
    #[must_use]
    fn from_key(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }
}

/// Runtime properties reported in `sePlantData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VelisProperty {
    /// Gateway identifier echoed by the server.
    Gw,
    /// Current operation mode value.
    Mode,
    /// Power switch.
    On,
    /// Requested water temperature.
    ReqTemp,
    /// Measured water temperature.
    Temp,
    /// Requested temperature as processed by the plant.
    ProcReqTemp,
    /// Anti-legionella cycle running.
    AntiLeg,
    /// Plant is currently heating.
    HeatReq,
    /// Available showers.
    AvShw,
    /// Eco mode flag.
    Eco,
}

impl SnapshotKey for VelisProperty {
    const ALL: &'static [Self] = &[
        Self::Gw,
        Self::Mode,
        Self::On,
        Self::ReqTemp,
        Self::Temp,
        Self::ProcReqTemp,
        Self::AntiLeg,
        Self::HeatReq,
        Self::AvShw,
        Self::Eco,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Gw => "gw",
            Self::Mode => "mode",
            Self::On => "on",
            Self::ReqTemp => "reqTemp",
            Self::Temp => "temp",
            Self::ProcReqTemp => "procReqTemp",
            Self::AntiLeg => "antiLeg",
            Self::HeatReq => "heatReq",
            Self::AvShw => "avShw",
            Self::Eco => "eco",
        }
    }
}

impl fmt::Display for VelisProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration entries reported in `sePlantData/{gw}/plantSettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeSetting {
    /// Periodic anti-legionella cycle enabled.
    AntilegionellaOnOff,
    /// Upper bound the user may request.
    MaxSetpointTemperature,
    /// Lowest allowed value for [`SeSetting::MaxSetpointTemperature`].
    MaxSetpointTemperatureMin,
    /// Highest allowed value for [`SeSetting::MaxSetpointTemperature`].
    MaxSetpointTemperatureMax,
}

impl SnapshotKey for SeSetting {
    const ALL: &'static [Self] = &[
        Self::AntilegionellaOnOff,
        Self::MaxSetpointTemperature,
        Self::MaxSetpointTemperatureMin,
        Self::MaxSetpointTemperatureMax,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::AntilegionellaOnOff => "SeAntilegionellaOnOff",
            Self::MaxSetpointTemperature => "SeMaxSetpointTemperature",
            Self::MaxSetpointTemperatureMin => "SeMaxSetpointTemperatureMin",
            Self::MaxSetpointTemperatureMax => "SeMaxSetpointTemperatureMax",
        }
    }
}

impl fmt::Display for SeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_lookup_by_name() {
        assert_eq!(
            VelisProperty::from_key("reqTemp"),
            Some(VelisProperty::ReqTemp)
        );
        assert_eq!(VelisProperty::from_key("on"), Some(VelisProperty::On));
        assert_eq!(VelisProperty::from_key("unknownField"), None);
    }

    #[test]
    fn setting_lookup_by_name() {
        assert_eq!(
            SeSetting::from_key("SeAntilegionellaOnOff"),
            Some(SeSetting::AntilegionellaOnOff)
        );
        assert_eq!(
            SeSetting::from_key("SeMaxSetpointTemperatureMin"),
            Some(SeSetting::MaxSetpointTemperatureMin)
        );
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in VelisProperty::ALL.iter().enumerate() {
            for b in &VelisProperty::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
