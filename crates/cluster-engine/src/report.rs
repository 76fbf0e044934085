//! Per-mode rendering of a pending input

use cluster_filters::{GearTiming, InputState, classify_gear};
use cluster_inputs::{InputDescriptor, InputMode, ReportArg, ReportLine, Transition};

/// Line to emit for a pending input, if its mode produces one.
///
/// - press-only: only when the stable value is pressed
/// - press-and-release: `P` or `R` from the stable value
/// - gear: the classified hint, nothing for an unmatched episode
/// - analog: the rescaled value
///
/// Silent templates never produce a line.
pub fn render(
    descriptor: &InputDescriptor,
    state: &InputState,
    gear: &GearTiming,
) -> Option<ReportLine> {
    let arg = match descriptor.mode {
        InputMode::Press if state.is_pressed() => ReportArg::None,
        InputMode::Press => return None,
        InputMode::PressRelease => ReportArg::Transition(if state.is_pressed() {
            Transition::Pressed
        } else {
            Transition::Released
        }),
        InputMode::Gear => ReportArg::Hint(classify_gear(state, gear)?),
        InputMode::Analog => ReportArg::Value(state.last_value),
    };
    ReportLine::new(descriptor.template, arg)
}
