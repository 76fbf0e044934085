//! Logical input identifiers

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{InputsError, InputsResult};

/// Every logical input of the panel, in descriptor table order.
///
/// The discriminant is the row index into [`crate::INPUTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum InputId {
    /// Warning lamp 0
    Icon0 = 0,
    /// Warning lamp 1
    Icon1,
    /// Warning lamp 2
    Icon2,
    /// Warning lamp 3
    Icon3,
    /// Warning lamp 4
    Icon4,
    /// Warning lamp 5
    Icon5,
    /// Warning lamp 6
    Icon6,
    /// Warning lamp 7
    Icon7,
    /// Warning lamp 8
    Icon8,
    /// Warning lamp 9
    Icon9,

    /// Accelerator pedal
    Accelerate,
    /// Brake pedal
    Brake,

    /// Fuel gauge, virtual channel 0
    FuelGauge,
    /// Oil pressure gauge, virtual channel 1
    OilGauge,
    /// Coolant temperature gauge, virtual channel 2
    TempGauge,

    /// Ignition key
    Ignition,
    /// Hazard light switch
    Hazard,

    /// Moves the potentiometer to the next gauge
    SwitchAnalog,

    /// Gear paddle, classified by click pattern
    Gear,
}

/// Number of logical inputs on the panel.
pub const INPUT_COUNT: usize = 19;

impl InputId {
    /// All inputs in table order.
    pub const ALL: [InputId; INPUT_COUNT] = [
        InputId::Icon0,
        InputId::Icon1,
        InputId::Icon2,
        InputId::Icon3,
        InputId::Icon4,
        InputId::Icon5,
        InputId::Icon6,
        InputId::Icon7,
        InputId::Icon8,
        InputId::Icon9,
        InputId::Accelerate,
        InputId::Brake,
        InputId::FuelGauge,
        InputId::OilGauge,
        InputId::TempGauge,
        InputId::Ignition,
        InputId::Hazard,
        InputId::SwitchAnalog,
        InputId::Gear,
    ];

    /// Row of this input in the descriptor table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Input at table row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InputsError::IndexOutOfRange`] past the last row.
    pub fn from_index(index: usize) -> InputsResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InputsError::IndexOutOfRange(index))
    }

    /// Stable snake_case name, as used in configuration and scenario files.
    pub const fn name(self) -> &'static str {
        match self {
            InputId::Icon0 => "icon0",
            InputId::Icon1 => "icon1",
            InputId::Icon2 => "icon2",
            InputId::Icon3 => "icon3",
            InputId::Icon4 => "icon4",
            InputId::Icon5 => "icon5",
            InputId::Icon6 => "icon6",
            InputId::Icon7 => "icon7",
            InputId::Icon8 => "icon8",
            InputId::Icon9 => "icon9",
            InputId::Accelerate => "accelerate",
            InputId::Brake => "brake",
            InputId::FuelGauge => "fuel_gauge",
            InputId::OilGauge => "oil_gauge",
            InputId::TempGauge => "temp_gauge",
            InputId::Ignition => "ignition",
            InputId::Hazard => "hazard",
            InputId::SwitchAnalog => "switch_analog",
            InputId::Gear => "gear",
        }
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for InputId {
    type Err = InputsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        InputId::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputsError::UnknownInput(wanted.to_string()))
    }
}
