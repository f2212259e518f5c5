// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operation modes of the Lydos Hybrid water heater.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Operation mode of a Lydos Hybrid plant.
///
/// The numeric values are the ones used by the cloud API in the `mode`
/// property and in mode change requests.
///
/// # Examples
///
/// ```
/// use lydos_lib::types::LydosPlantMode;
///
/// let mode: LydosPlantMode = "GREEN".parse().unwrap();
/// assert_eq!(mode, LydosPlantMode::Green);
/// assert_eq!(mode.value(), 2);
/// assert_eq!(mode.as_str(), "GREEN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LydosPlantMode {
    /// Learns the usage pattern and heats ahead of it.
    IMemory,
    /// Heat pump only.
    Green,
    /// Follows the programmed time slots.
    Program,
    /// Heat pump and resistor together.
    Boost,
}

impl LydosPlantMode {
    /// All modes in declaration order.
    pub const ALL: [Self; 4] = [Self::IMemory, Self::Green, Self::Program, Self::Boost];

    /// Returns the mode name as used by the API constants.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IMemory => "IMEMORY",
            Self::Green => "GREEN",
            Self::Program => "PROGRAM",
            Self::Boost => "BOOST",
        }
    }

    /// Returns the numeric value sent to and received from the API.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::IMemory => 1,
            Self::Green => 2,
            Self::Program => 6,
            Self::Boost => 7,
        }
    }

    /// Decodes a numeric mode value.
    ///
    /// Returns `None` for values no Lydos mode uses.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::IMemory),
            2 => Some(Self::Green),
            6 => Some(Self::Program),
            7 => Some(Self::Boost),
            _ => None,
        }
    }
}

impl fmt::Display for LydosPlantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LydosPlantMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValueError::InvalidMode(s.to_string()))
    }
}
