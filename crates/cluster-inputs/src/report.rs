//! Report line rendering
//!
//! Lines are rendered into a fixed stack buffer so the poll loop never
//! allocates and the sink sees each line as a single write.

use core::fmt;
use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};

use super::{ArgSlot, GAUGE_SCALE_MAX, GearHint, LINE_ENDING, ReportTemplate};

/// Longest line the protocol produces (`GAUG F 100\r\n` is 12 bytes).
pub const MAX_LINE_LEN: usize = 16;

/// Debounced edge of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Committed to pressed
    Pressed,
    /// Committed to released
    Released,
}

impl Transition {
    /// `P` or `R`, as written after press/release labels.
    pub const fn code(self) -> char {
        match self {
            Transition::Pressed => 'P',
            Transition::Released => 'R',
        }
    }
}

/// Value filling a template's argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportArg {
    /// Template takes no argument
    None,
    /// Press/release code
    Transition(Transition),
    /// Rescaled gauge value, 0..=100
    Value(u8),
    /// Gear gesture suffix
    Hint(GearHint),
}

impl ReportArg {
    fn slot(self) -> ArgSlot {
        match self {
            ReportArg::None => ArgSlot::None,
            ReportArg::Transition(_) => ArgSlot::Char,
            ReportArg::Value(_) => ArgSlot::Number,
            ReportArg::Hint(_) => ArgSlot::Suffix,
        }
    }
}

/// One protocol line, already checked against its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    template: ReportTemplate,
    arg: ReportArg,
}

impl ReportLine {
    /// Pair `template` with `arg`.
    ///
    /// Returns `None` for silent templates, for an argument that does not fit
    /// the template's slot, and for gauge values above [`GAUGE_SCALE_MAX`].
    pub fn new(template: ReportTemplate, arg: ReportArg) -> Option<Self> {
        if template.is_silent() || template.arg_slot() != arg.slot() {
            return None;
        }
        if let ReportArg::Value(value) = arg
            && value > GAUGE_SCALE_MAX
        {
            return None;
        }
        Some(Self { template, arg })
    }

    /// Template of this line.
    pub fn template(&self) -> ReportTemplate {
        self.template
    }

    /// Argument filling the template.
    pub fn arg(&self) -> ReportArg {
        self.arg
    }

    /// Render into `buf`, returning the rendered bytes.
    pub fn encode<'a>(&self, buf: &'a mut [u8; MAX_LINE_LEN]) -> &'a [u8] {
        let mut cursor = Cursor::new(buf.as_mut_slice());
        let len = match write!(cursor, "{self}") {
            Ok(()) => usize::try_from(cursor.position()).unwrap_or(0),
            // Every line fits MAX_LINE_LEN; never hand out a truncated one.
            Err(_) => 0,
        };
        buf.get(..len).unwrap_or(&[])
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.template, self.arg) {
            (ReportTemplate::Icon(n), _) => write!(f, "ICON {n}")?,
            (ReportTemplate::IconPressRelease(n), ReportArg::Transition(t)) => {
                write!(f, "ICON {n} {}", t.code())?
            }
            (ReportTemplate::Accelerate, ReportArg::Transition(t)) => {
                write!(f, "ACCL {}", t.code())?
            }
            (ReportTemplate::Brake, ReportArg::Transition(t)) => write!(f, "BREK {}", t.code())?,
            (ReportTemplate::Gauge(kind), ReportArg::Value(value)) => {
                write!(f, "GAUG {} {value}", kind.code())?
            }
            (ReportTemplate::Ignition, _) => f.write_str("IGNT")?,
            (ReportTemplate::Hazard, _) => f.write_str("HZRD")?,
            (ReportTemplate::Gear, ReportArg::Hint(hint)) => write!(f, "GEAR{}", hint.suffix())?,
            // ReportLine::new rejects every other pairing.
            _ => return Ok(()),
        }
        f.write_str(LINE_ENDING)
    }
}
