//! Engine counters

use serde::{Deserialize, Serialize};

/// Running counters of one engine instance. All counters saturate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Ticks executed
    pub ticks: u64,
    /// Ticks whose elapsed time exceeded the clamp
    pub clamped_ticks: u64,
    /// Backwards clock readings seen by the runner
    pub clock_rollovers: u64,
    /// Report lines handed to the sink
    pub lines_written: u64,
    /// Report lines lost to sink errors
    pub lines_dropped: u64,
}

impl EngineStats {
    pub(crate) fn bump(counter: &mut u64) {
        *counter = counter.saturating_add(1);
    }
}
