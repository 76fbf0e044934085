//! Descriptor type definitions

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{InputId, InputsError, InputsResult, VIRTUAL_CHANNEL_COUNT};

/// Where the raw value of an input comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Digital pin, read through the digital primitive (already active-high).
    Pin(u8),
    /// Dedicated physical analog channel.
    Analog(u8),
    /// Virtual analog channel backed by the multiplexed potentiometer.
    Virtual(u8),
}

impl Channel {
    /// Whether reads go through the analog path.
    pub fn is_analog(self) -> bool {
        matches!(self, Channel::Analog(_) | Channel::Virtual(_))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Pin(pin) => write!(f, "D{pin}"),
            Channel::Analog(channel) => write!(f, "A{channel}"),
            Channel::Virtual(index) => write!(f, "V{index}"),
        }
    }
}

/// Filter path an input runs through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputCategory {
    /// Debounced boolean
    Digital,
    /// Block-averaged sample
    Analog,
}

/// How an input's stable value is interpreted and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Reports only the transition to pressed.
    Press,
    /// Reports both transitions with a `P`/`R` code.
    PressRelease,
    /// Click/hold classified multi-function input.
    Gear,
    /// Averaged and rescaled analog value.
    Analog,
}

impl InputMode {
    /// Filter category this mode runs under.
    pub fn category(self) -> InputCategory {
        match self {
            InputMode::Press | InputMode::PressRelease | InputMode::Gear => InputCategory::Digital,
            InputMode::Analog => InputCategory::Analog,
        }
    }
}

/// Gauge named in a `GAUG` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeKind {
    /// `F`
    Fuel,
    /// `O`
    Oil,
    /// `T`
    Temperature,
}

impl GaugeKind {
    /// Single character code used on the wire.
    pub const fn code(self) -> char {
        match self {
            GaugeKind::Fuel => 'F',
            GaugeKind::Oil => 'O',
            GaugeKind::Temperature => 'T',
        }
    }

    /// Parse a wire code back into a gauge kind.
    pub fn from_code(code: char) -> InputsResult<Self> {
        match code {
            'F' => Ok(GaugeKind::Fuel),
            'O' => Ok(GaugeKind::Oil),
            'T' => Ok(GaugeKind::Temperature),
            other => Err(InputsError::UnknownGauge(other)),
        }
    }
}

/// Classification of a closed gear episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearHint {
    /// One short tap.
    Short,
    /// One tap held past the hold threshold.
    Long,
    /// Two short taps.
    Double,
}

impl GearHint {
    /// Text appended to `GEAR`.
    pub const fn suffix(self) -> &'static str {
        match self {
            GearHint::Short => "",
            GearHint::Long => " L",
            GearHint::Double => " S",
        }
    }
}

/// Positional argument a report template carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgSlot {
    /// No argument
    None,
    /// Single `P`/`R` character
    Char,
    /// Decimal gauge value
    Number,
    /// Text glued to the label
    Suffix,
}

/// Semantic kind of the line an input emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportTemplate {
    /// `ICON <n>`
    Icon(u8),
    /// `ICON <n> <P|R>`
    IconPressRelease(u8),
    /// `ACCL <P|R>`
    Accelerate,
    /// `BREK <P|R>`
    Brake,
    /// `GAUG <F|O|T> <0-100>`
    Gauge(GaugeKind),
    /// `IGNT`
    Ignition,
    /// `HZRD`
    Hazard,
    /// `GEAR<hint>`
    Gear,
    /// Emits nothing; the input only drives local behavior.
    Silent,
}

impl ReportTemplate {
    /// Argument slot the template expects.
    pub fn arg_slot(self) -> ArgSlot {
        match self {
            ReportTemplate::Icon(_)
            | ReportTemplate::Ignition
            | ReportTemplate::Hazard
            | ReportTemplate::Silent => ArgSlot::None,
            ReportTemplate::IconPressRelease(_)
            | ReportTemplate::Accelerate
            | ReportTemplate::Brake => ArgSlot::Char,
            ReportTemplate::Gauge(_) => ArgSlot::Number,
            ReportTemplate::Gear => ArgSlot::Suffix,
        }
    }

    /// Template that never renders a line.
    pub fn is_silent(self) -> bool {
        self == ReportTemplate::Silent
    }

    /// Whether a template of this shape can be rendered for `mode`.
    pub fn fits_mode(self, mode: InputMode) -> bool {
        if self.is_silent() {
            return mode.category() == InputCategory::Digital;
        }
        matches!(
            (mode, self.arg_slot()),
            (InputMode::Press, ArgSlot::None)
                | (InputMode::PressRelease, ArgSlot::Char)
                | (InputMode::Gear, ArgSlot::Suffix)
                | (InputMode::Analog, ArgSlot::Number)
        )
    }
}

/// Immutable description of one panel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDescriptor {
    /// Input this row describes
    pub id: InputId,
    /// Where the reading comes from
    pub channel: Channel,
    /// Report line shape
    pub template: ReportTemplate,
    /// Filter and report behaviour
    pub mode: InputMode,
}

impl InputDescriptor {
    /// Build a descriptor row.
    pub const fn new(
        id: InputId,
        channel: Channel,
        template: ReportTemplate,
        mode: InputMode,
    ) -> Self {
        Self {
            id,
            channel,
            template,
            mode,
        }
    }

    /// Filter category of this input.
    pub fn category(&self) -> InputCategory {
        self.mode.category()
    }

    /// Template, mode and channel agree with each other.
    ///
    /// A descriptor failing this check is a wiring/table defect; the poll
    /// engine does not guard against it at runtime.
    pub fn is_consistent(&self) -> bool {
        let channel_ok = match (self.category(), self.channel) {
            (InputCategory::Digital, Channel::Pin(_)) => true,
            (InputCategory::Analog, Channel::Analog(_)) => true,
            (InputCategory::Analog, Channel::Virtual(index)) => {
                usize::from(index) < VIRTUAL_CHANNEL_COUNT
            }
            _ => false,
        };
        channel_ok && self.template.fits_mode(self.mode)
    }
}
