//! Descriptor table of the reference panel
//!
//! Wiring fits an Arduino Mega class board: lamp switches on the even pins
//! 22..=40, pedals and misc keys on 8..=12, the gear key on 52 and the gauge
//! potentiometer on A0.

use super::{Channel, GaugeKind, INPUT_COUNT, InputDescriptor, InputId, InputMode, ReportTemplate};

use InputMode::{Analog, Gear, Press, PressRelease};

/// One row per [`InputId`], indexed by its discriminant.
pub static INPUTS: [InputDescriptor; INPUT_COUNT] = [
    InputDescriptor::new(InputId::Icon0, Channel::Pin(22), ReportTemplate::Icon(0), Press),
    InputDescriptor::new(InputId::Icon1, Channel::Pin(24), ReportTemplate::Icon(1), Press),
    InputDescriptor::new(InputId::Icon2, Channel::Pin(26), ReportTemplate::Icon(2), Press),
    InputDescriptor::new(InputId::Icon3, Channel::Pin(28), ReportTemplate::Icon(3), Press),
    InputDescriptor::new(InputId::Icon4, Channel::Pin(30), ReportTemplate::Icon(4), Press),
    InputDescriptor::new(InputId::Icon5, Channel::Pin(32), ReportTemplate::Icon(5), Press),
    InputDescriptor::new(InputId::Icon6, Channel::Pin(34), ReportTemplate::Icon(6), Press),
    InputDescriptor::new(
        InputId::Icon7,
        Channel::Pin(36),
        ReportTemplate::IconPressRelease(7),
        PressRelease,
    ),
    InputDescriptor::new(InputId::Icon8, Channel::Pin(38), ReportTemplate::Icon(8), Press),
    InputDescriptor::new(InputId::Icon9, Channel::Pin(40), ReportTemplate::Icon(9), Press),
    InputDescriptor::new(
        InputId::Accelerate,
        Channel::Pin(10),
        ReportTemplate::Accelerate,
        PressRelease,
    ),
    InputDescriptor::new(InputId::Brake, Channel::Pin(9), ReportTemplate::Brake, PressRelease),
    InputDescriptor::new(
        InputId::FuelGauge,
        Channel::Virtual(0),
        ReportTemplate::Gauge(GaugeKind::Fuel),
        Analog,
    ),
    InputDescriptor::new(
        InputId::OilGauge,
        Channel::Virtual(1),
        ReportTemplate::Gauge(GaugeKind::Oil),
        Analog,
    ),
    InputDescriptor::new(
        InputId::TempGauge,
        Channel::Virtual(2),
        ReportTemplate::Gauge(GaugeKind::Temperature),
        Analog,
    ),
    InputDescriptor::new(InputId::Ignition, Channel::Pin(12), ReportTemplate::Ignition, Press),
    InputDescriptor::new(InputId::Hazard, Channel::Pin(11), ReportTemplate::Hazard, Press),
    InputDescriptor::new(
        InputId::SwitchAnalog,
        Channel::Pin(8),
        ReportTemplate::Silent,
        PressRelease,
    ),
    InputDescriptor::new(InputId::Gear, Channel::Pin(52), ReportTemplate::Gear, Gear),
];

/// Descriptor row for `id`.
pub fn descriptor(id: InputId) -> &'static InputDescriptor {
    // The fallback is unreachable while INPUTS and InputId::ALL share INPUT_COUNT.
    let [first, ..] = &INPUTS;
    INPUTS.get(id.index()).unwrap_or(first)
}

/// First descriptor that fails [`InputDescriptor::is_consistent`] or sits at
/// the wrong row, if any.
pub fn first_table_defect() -> Option<&'static InputDescriptor> {
    INPUTS
        .iter()
        .enumerate()
        .find(|(row, descriptor)| descriptor.id.index() != *row || !descriptor.is_consistent())
        .map(|(_, descriptor)| descriptor)
}
