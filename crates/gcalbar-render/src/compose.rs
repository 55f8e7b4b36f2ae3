//! Line compositor.
//!
//! Zips the grid and agenda panels into final output lines. This is the only
//! place the two panels meet, and the only place `#` escaping is applied.

use crate::grid::GRID_ROW_WIDTH;
use crate::highlight::escape_hashes;

/// Fixed separator between the two panels.
pub const COLUMN_GAP: &str = "    ";

/// Pair line `i` of each panel, padding the shorter side: a missing left line
/// becomes a grid-width blank, a missing right line becomes nothing.
pub fn zip_columns(left: &[String], right: &[String]) -> Vec<String> {
    let blank = " ".repeat(GRID_ROW_WIDTH);
    (0..left.len().max(right.len()))
        .map(|i| {
            let left_part = left.get(i).map_or(blank.as_str(), String::as_str);
            let right_part = right.get(i).map(|line| escape_hashes(line)).unwrap_or_default();
            format!("{left_part}{COLUMN_GAP}{right_part}")
        })
        .collect()
}
