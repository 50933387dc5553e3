//! Per-cycle tracking decision and terminal run outcome

use crate::domain::price::PriceReading;

/// What the tracking loop does with a successfully observed price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDecision {
    /// Price still above target: sleep and poll again
    Continue,
    /// Price at or below target: notify and stop
    Alert,
}

/// Alert when the observed price is less than or equal to the target.
/// The boundary is inclusive: an exact match fires.
pub fn decide(observed: u64, target: u64) -> CycleDecision {
    if observed <= target {
        CycleDecision::Alert
    } else {
        CycleDecision::Continue
    }
}

/// Terminal result of a tracking run. Produced only after the one-shot
/// alert has been delivered; fatal fetch errors surface as errors instead.
#[derive(Debug)]
pub struct TrackerOutcome {
    /// The reading that triggered the alert
    pub final_reading: PriceReading,
    /// Total poll cycles, including the alerting one
    pub cycles: u64,
    /// History-log writes that failed along the way (non-fatal)
    pub record_failures: u64,
}
