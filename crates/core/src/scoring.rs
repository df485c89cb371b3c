//! Scoring and level progression
//!
//! Classic table scoring multiplied by the current level (which starts at 1),
//! a flat per-row bonus for hard drops, and a gravity interval measured in
//! ticks that shrinks by a fixed step per level.

use crate::types::{
    GRAVITY_INTERVAL_STEP, HARD_DROP_POINTS_PER_ROW, INITIAL_GRAVITY_INTERVAL, LINES_PER_LEVEL,
    LINE_SCORES, MIN_GRAVITY_INTERVAL,
};

/// Points for clearing `lines` rows at once at `level`.
///
/// # Panics
///
/// If `lines > 4`; a single piece can't complete more rows than it spans.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    assert!(lines < LINE_SCORES.len(), "{} lines cleared by one piece", lines);
    LINE_SCORES[lines].saturating_mul(level)
}

/// Hard drop bonus for falling `rows` rows.
pub fn hard_drop_bonus(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS_PER_ROW)
}

/// Whether a session at `level` with `total_lines` cleared moves to the next level.
pub fn should_level_up(total_lines: u32, level: u32) -> bool {
    total_lines >= level.saturating_mul(LINES_PER_LEVEL)
}

/// Gravity interval after one more level up, floored.
pub fn next_gravity_interval(current: u32) -> u32 {
    if current > MIN_GRAVITY_INTERVAL {
        current
            .saturating_sub(GRAVITY_INTERVAL_STEP)
            .max(MIN_GRAVITY_INTERVAL)
    } else {
        current
    }
}

/// Gravity interval a session reaches at `level` when it levels up one step at a time.
pub fn gravity_interval_for_level(level: u32) -> u32 {
    (1..level.max(1)).fold(INITIAL_GRAVITY_INTERVAL, |interval, _| {
        next_gravity_interval(interval)
    })
}
