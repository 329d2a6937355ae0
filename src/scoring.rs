//! Line-clear scoring.
//!
//! Every cleared line is worth `LINE_POINTS`, scaled by a multiplier:
//! - any column in the clear: 8, however many rows came with it
//! - rows only: 1 for a single, 2 for a double, 4 for three or more

use crate::grid::ClearReport;

pub const LINE_POINTS: u64 = 100;
pub const CROSS_MULTIPLIER: u64 = 8;

pub fn multiplier(lines: usize, crosses: bool) -> u64 {
    match (lines, crosses) {
        (0, _) => 0,
        (_, true) => CROSS_MULTIPLIER,
        (1, false) => 1,
        (2, false) => 2,
        _ => 4,
    }
}

/// Points awarded for one scan's worth of cleared lines.
pub fn clear_score(report: &ClearReport) -> u64 {
    let lines = report.lines() as u64;
    lines * LINE_POINTS * multiplier(report.lines(), report.crosses())
}
