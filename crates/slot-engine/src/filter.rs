//! Bookable-room filtering from directory display names.
//!
//! Corporate room directories embed metadata in parenthesized groups of the
//! display name, e.g. `"1st Floor North (Informal) (4)"`: an all-digit group
//! is the seating capacity, non-numeric groups are feature tags. Entries
//! without a capacity group are not rooms and are silently excluded.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a parenthesized all-digit group; the last one is the capacity.
static CAPACITY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d+)\)").unwrap());

/// Matches a parenthesized non-numeric tag group.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\D+?)\)").unwrap());

/// Default seating-capacity floor: the tool targets group meeting spaces.
pub const DEFAULT_MIN_CAPACITY: u32 = 3;

/// Knobs for [`is_bookable_room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Accept rooms tagged `Informal`.
    pub include_informal: bool,
    /// Accept rooms tagged `Stand-Up` or `Standing Only`.
    pub include_standing: bool,
    /// Reject rooms seating fewer than this many people.
    pub min_capacity: u32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            include_informal: false,
            include_standing: false,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

/// Extract the seating capacity from a display name: the last parenthesized
/// all-digit group, or `None` when the name carries no such group.
pub fn room_capacity(display_name: &str) -> Option<u32> {
    CAPACITY_RE
        .captures_iter(display_name)
        .last()
        .and_then(|c| c[1].parse().ok())
}

/// Extract every parenthesized non-numeric tag group from a display name.
pub fn room_tags(display_name: &str) -> Vec<&str> {
    TAG_RE
        .captures_iter(display_name)
        .map(|c| c.get(1).unwrap().as_str())
        .collect()
}

/// Decide whether a directory entry display name denotes a usable room.
///
/// Pure predicate: malformed names (no parenthetical capacity) are silently
/// excluded, never an error.
pub fn is_bookable_room(display_name: &str, opts: &FilterOptions) -> bool {
    let Some(capacity) = room_capacity(display_name) else {
        return false;
    };

    if capacity < opts.min_capacity {
        return false;
    }

    let tags = room_tags(display_name);

    if tags.contains(&"Informal") && !opts.include_informal {
        return false;
    }

    if (tags.contains(&"Stand-Up") || tags.contains(&"Standing Only")) && !opts.include_standing {
        return false;
    }

    true
}
