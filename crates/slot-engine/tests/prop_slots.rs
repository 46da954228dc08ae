//! Property-based tests for the availability scan using proptest.
//!
//! These verify invariants that must hold for *any* busy list and window,
//! not just the specific examples in `slot_tests.rs`.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use slot_engine::interval::{no_overlap, BusyInterval};
use slot_engine::slots::{compute_slots, PreferenceWindow};

// ---------------------------------------------------------------------------
// Strategies — generate wall-clock times, windows and busy lists on one day
// ---------------------------------------------------------------------------

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

/// Minutes-from-midnight within a generous business day.
fn arb_minute_of_day() -> impl Strategy<Value = i64> {
    (6i64 * 60)..=(21i64 * 60)
}

fn at(minutes: i64) -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap() + Duration::minutes(minutes)
}

fn arb_window() -> impl Strategy<Value = PreferenceWindow> {
    (arb_minute_of_day(), 1i64..=8 * 60, 5i64..=120).prop_map(|(start, span, duration)| {
        PreferenceWindow {
            start: at(start),
            end: at(start + span),
            duration_minutes: duration,
        }
    })
}

fn arb_busy() -> impl Strategy<Value = BusyInterval> {
    (arb_minute_of_day(), 0i64..=180).prop_map(|(start, len)| BusyInterval {
        start: at(start),
        end: at(start + len),
    })
}

fn arb_busy_list() -> impl Strategy<Value = Vec<BusyInterval>> {
    prop::collection::vec(arb_busy(), 0..8)
}

fn arb_increment() -> impl Strategy<Value = i64> {
    prop_oneof![Just(5i64), Just(15), Just(30), Just(60)]
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Every slot lies within the window and has the exact duration
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_stay_inside_the_window(
        busy in arb_busy_list(),
        window in arb_window(),
        increment in arb_increment(),
    ) {
        let slots = compute_slots(&busy, &window, increment).unwrap();
        let duration = Duration::minutes(window.duration_minutes);

        for slot in &slots {
            prop_assert!(slot.start >= window.start);
            prop_assert!(slot.end <= window.end);
            prop_assert_eq!(slot.end - slot.start, duration);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: No slot overlaps any busy interval
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_never_overlap_reservations(
        busy in arb_busy_list(),
        window in arb_window(),
        increment in arb_increment(),
    ) {
        let slots = compute_slots(&busy, &window, increment).unwrap();

        for slot in &slots {
            for b in &busy {
                prop_assert!(
                    no_overlap(slot.start, slot.end, b.start, b.end),
                    "slot {:?} intersects reservation {:?}",
                    slot,
                    b
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Starts strictly increase and sit on increment multiples
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn starts_increase_on_the_increment_grid(
        busy in arb_busy_list(),
        window in arb_window(),
        increment in arb_increment(),
    ) {
        let slots = compute_slots(&busy, &window, increment).unwrap();

        for pair in slots.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }
        for slot in &slots {
            let offset = (slot.start - window.start).num_minutes();
            prop_assert_eq!(offset % increment, 0, "start {:?} off the grid", slot.start);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Empty busy list fills the window completely
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn empty_busy_list_produces_every_candidate(
        window in arb_window(),
        increment in arb_increment(),
    ) {
        let slots = compute_slots(&[], &window, increment).unwrap();

        let span = (window.end - window.start).num_minutes();
        let expected = if span < window.duration_minutes {
            0
        } else {
            (span - window.duration_minutes) / increment + 1
        };
        prop_assert_eq!(slots.len() as i64, expected);
    }
}

// ---------------------------------------------------------------------------
// Property 5: The scan is a pure function — identical inputs, identical output
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn scan_is_deterministic(
        busy in arb_busy_list(),
        window in arb_window(),
        increment in arb_increment(),
    ) {
        let first = compute_slots(&busy, &window, increment).unwrap();
        let second = compute_slots(&busy, &window, increment).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Overlap predicate is symmetric
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlap_predicate_is_symmetric(
        a in arb_busy(),
        b in arb_busy(),
    ) {
        prop_assert_eq!(
            no_overlap(a.start, a.end, b.start, b.end),
            no_overlap(b.start, b.end, a.start, a.end)
        );
    }
}
