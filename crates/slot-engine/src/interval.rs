//! Busy intervals and the overlap predicate.
//!
//! Intervals are closed-open over naive local wall-clock time. Adjacent
//! intervals (one ending exactly when another starts) do NOT overlap.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A time range during which a room is already reserved.
///
/// Per-room busy lists are unordered and may contain overlapping entries;
/// nothing in this crate assumes pre-merged or sorted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Returns true iff the two closed-open intervals do not intersect.
///
/// Computed as `max(a_start, b_start) >= min(a_end, b_end)`. Boundary-touching
/// intervals count as non-overlapping, and a degenerate zero-length interval
/// never conflicts with anything. Symmetric in its two intervals.
pub fn no_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start.max(b_start) >= a_end.min(b_end)
}

impl BusyInterval {
    /// Whether a candidate `[start, end)` range is clear of this reservation.
    pub fn clear_of(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        no_overlap(start, end, self.start, self.end)
    }
}
