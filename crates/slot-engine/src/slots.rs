//! Fixed-step availability scan.
//!
//! Walks candidate start times through the preference window at a fixed
//! increment and keeps every candidate that is clear of all busy intervals.
//! Consecutive slots may overlap each other when the duration exceeds the
//! increment — the scan offers fine-grained start-time choice, not a maximal
//! packing.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::BusyInterval;

/// Default scan step between candidate start times, in minutes.
pub const DEFAULT_INCREMENT_MINUTES: i64 = 30;

/// A resolved directory entry for a bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique directory address; free/busy results are keyed by it.
    pub email: String,
    /// Display name with embedded parenthetical capacity and feature tags.
    pub display_name: String,
}

/// The user-specified search bounds for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

/// A candidate booking interval of the requested duration, free of conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// A room together with its fetched busy intervals for the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSchedule {
    pub room: Room,
    pub busy: Vec<BusyInterval>,
}

/// A room together with its computed slots, in increasing start order.
///
/// Recomputed from scratch whenever the user changes the date, window or
/// duration; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAvailability {
    pub room: Room,
    pub slots: Vec<AvailabilitySlot>,
}

/// Enumerate every bookable slot for one room within the preference window.
///
/// Fixed-step scan: starting at `window.start`, a candidate slot of
/// `window.duration_minutes` is kept iff it has no overlap with any busy
/// interval, then the start advances by `increment_minutes` — a configured
/// constant independent of the meeting duration. The scan stops as soon as a
/// candidate would run past `window.end`, so every returned slot lies inside
/// the window. Starts are strictly increasing.
///
/// The scan is a pure function of its inputs: identical inputs yield
/// identical output.
///
/// # Errors
/// Returns `SlotError::InvalidDuration` or `SlotError::InvalidIncrement`
/// when the respective parameter is not positive; both would otherwise make
/// the scan loop forever.
pub fn compute_slots(
    busy: &[BusyInterval],
    window: &PreferenceWindow,
    increment_minutes: i64,
) -> Result<Vec<AvailabilitySlot>> {
    if window.duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(window.duration_minutes));
    }
    if increment_minutes <= 0 {
        return Err(SlotError::InvalidIncrement(increment_minutes));
    }

    let duration = Duration::minutes(window.duration_minutes);
    let step = Duration::minutes(increment_minutes);

    let mut slots = Vec::new();
    let mut slot_start = window.start;

    loop {
        let slot_end = slot_start + duration;
        if slot_end > window.end {
            break;
        }

        if busy.iter().all(|b| b.clear_of(slot_start, slot_end)) {
            slots.push(AvailabilitySlot {
                start: slot_start,
                end: slot_end,
            });
        }

        slot_start += step;
    }

    Ok(slots)
}

/// Compute availability for every room and keep those with at least one
/// slot, preserving input order.
///
/// # Errors
/// Propagates the parameter validation of [`compute_slots`].
pub fn find_free_rooms(
    schedules: &[RoomSchedule],
    window: &PreferenceWindow,
    increment_minutes: i64,
) -> Result<Vec<RoomAvailability>> {
    let mut free = Vec::new();

    for schedule in schedules {
        let slots = compute_slots(&schedule.busy, window, increment_minutes)?;
        if !slots.is_empty() {
            free.push(RoomAvailability {
                room: schedule.room.clone(),
                slots,
            });
        }
    }

    Ok(free)
}
