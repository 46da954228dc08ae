//! Tests for bookable-room filtering from directory display names.

use slot_engine::filter::{is_bookable_room, room_capacity, room_tags, FilterOptions};

fn defaults() -> FilterOptions {
    FilterOptions::default()
}

// ── Capacity extraction ─────────────────────────────────────────────────────

#[test]
fn capacity_is_last_numeric_group() {
    assert_eq!(room_capacity("3rd Floor West (Video) (8)"), Some(8));
    assert_eq!(room_capacity("Mezzanine (12)"), Some(12));
    // Multiple numeric groups: the trailing one wins.
    assert_eq!(room_capacity("Annex 2 (4) (10)"), Some(10));
}

#[test]
fn names_without_numeric_group_have_no_capacity() {
    assert_eq!(room_capacity("Facilities Mailbox"), None);
    assert_eq!(room_capacity("Quiet Corner (Informal)"), None);
}

#[test]
fn tags_are_every_non_numeric_group() {
    assert_eq!(
        room_tags("1st Floor North (Informal) (Stand-Up) (6)"),
        vec!["Informal", "Stand-Up"]
    );
    assert!(room_tags("Mezzanine (12)").is_empty());
}

// ── Acceptance rules ────────────────────────────────────────────────────────

#[test]
fn plain_room_with_enough_seats_is_accepted() {
    assert!(is_bookable_room("2nd Floor East (6)", &defaults()));
}

#[test]
fn rooms_below_capacity_floor_are_rejected() {
    // Trailing numeric group < 3 and no tags → never bookable.
    assert!(!is_bookable_room("Phone Booth (1)", &defaults()));
    assert!(!is_bookable_room("Huddle (2)", &defaults()));
    // Exactly at the floor is fine.
    assert!(is_bookable_room("Huddle (3)", &defaults()));
}

#[test]
fn names_without_capacity_are_rejected_regardless_of_flags() {
    let permissive = FilterOptions {
        include_informal: true,
        include_standing: true,
        ..Default::default()
    };
    assert!(!is_bookable_room("Facilities Mailbox", &permissive));
    assert!(!is_bookable_room("Lounge (Informal)", &permissive));
}

#[test]
fn informal_rooms_need_the_informal_flag() {
    let name = "Lounge (Informal) (5)";
    assert!(!is_bookable_room(name, &defaults()));
    assert!(is_bookable_room(
        name,
        &FilterOptions {
            include_informal: true,
            ..Default::default()
        }
    ));
}

#[test]
fn standing_rooms_need_the_standing_flag_both_spellings() {
    let opts = FilterOptions {
        include_standing: true,
        ..Default::default()
    };
    for name in ["Scrum Corner (Stand-Up) (8)", "Scrum Corner (Standing Only) (8)"] {
        assert!(!is_bookable_room(name, &defaults()), "{name}");
        assert!(is_bookable_room(name, &opts), "{name}");
    }
}

#[test]
fn capacity_floor_is_configurable() {
    let large_only = FilterOptions {
        min_capacity: 10,
        ..Default::default()
    };
    assert!(!is_bookable_room("2nd Floor East (6)", &large_only));
    assert!(is_bookable_room("Town Hall (40)", &large_only));
}

#[test]
fn flags_do_not_interact() {
    // A standing room is still rejected when only informal inclusion is on.
    let informal_only = FilterOptions {
        include_informal: true,
        ..Default::default()
    };
    assert!(!is_bookable_room("Scrum Corner (Stand-Up) (8)", &informal_only));
}
