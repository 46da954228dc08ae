//! The interactive booking flow.
//!
//! SelectDate → SelectPreferenceWindow → ComputeAvailability → SelectRoom →
//! SelectSlot → Confirm/Book → Done. While no room has a free slot the flow
//! loops back to the window prompt, with no limit on retries. Booking is the
//! single side effect and happens last, behind an explicit confirmation.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::style::Stylize;
use inquire::{Confirm, Select};
use slot_engine::{
    describe_slots, find_free_rooms, format_range, is_bookable_room, AvailabilitySlot,
    FilterOptions, PreferenceWindow, Room, RoomAvailability, RoomSchedule,
};

use crate::backend::CalendarBackend;
use crate::config::Config;
use crate::error::RoomscoutError;

const DEFAULT_MEETING_DURATION: i64 = 30;
const DEFAULT_TIME_RANGE: &str = "9:30-16:30";
/// Slots previewed per room in the selection list.
const SLOT_PREVIEW: usize = 2;

struct RoomChoice(RoomAvailability);

impl fmt::Display for RoomChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.0.room.display_name,
            describe_slots(&self.0.slots, SLOT_PREVIEW)
        )
    }
}

struct SlotChoice(AvailabilitySlot);

impl fmt::Display for SlotChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_range(&self.0))
    }
}

/// Resolve the directory and keep the bookable rooms.
///
/// Standing-only rooms stay in at this stage; the informal flag is the only
/// per-run filtering choice. An empty result is fatal — it means the
/// configured prefixes do not name any room resources.
fn load_rooms<B: CalendarBackend>(
    backend: &B,
    config: &Config,
    include_informal: bool,
) -> Result<Vec<Room>, RoomscoutError> {
    let opts = FilterOptions {
        include_informal,
        include_standing: true,
        min_capacity: config.min_room_capacity,
    };

    let rooms: Vec<Room> = backend
        .resolve_room_directory(&config.room_prefixes)?
        .into_iter()
        .filter(|entry| is_bookable_room(&entry.display_name, &opts))
        .map(|entry| Room {
            email: entry.email,
            display_name: entry.display_name,
        })
        .collect();

    if rooms.is_empty() {
        return Err(RoomscoutError::NoRooms);
    }
    Ok(rooms)
}

/// Fetch each room's reservations over the configured business day,
/// associating results back to the room by its directory address.
fn fetch_schedules<B: CalendarBackend>(
    backend: &B,
    rooms: &[Room],
    day: NaiveDate,
    config: &Config,
) -> Result<Vec<RoomSchedule>, RoomscoutError> {
    let range_start = business_hour(day, config.day_start_hour);
    let range_end = business_hour(day, config.day_end_hour);

    let mut schedules = Vec::with_capacity(rooms.len());
    for room in rooms {
        let busy = backend.fetch_busy_intervals(&room.email, range_start, range_end)?;
        schedules.push(RoomSchedule {
            room: room.clone(),
            busy,
        });
    }
    Ok(schedules)
}

fn business_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, 0, 0)
        .expect("business-day hours are validated at config load")
}

/// Ask for preference windows until at least one room has a slot.
fn search_availability(
    schedules: &[RoomSchedule],
    day: NaiveDate,
    config: &Config,
) -> Result<Vec<RoomAvailability>, RoomscoutError> {
    loop {
        let (start, end) = crate::prompt::ask_time_window(day, DEFAULT_TIME_RANGE)?;
        let duration_minutes = crate::prompt::ask_duration(DEFAULT_MEETING_DURATION)?;

        let window = PreferenceWindow {
            start,
            end,
            duration_minutes,
        };
        let free = find_free_rooms(schedules, &window, config.increment_minutes)?;
        if free.is_empty() {
            println!(
                "{}",
                "No free rooms in this time range. Please specify a different time.".yellow()
            );
            continue;
        }
        return Ok(free);
    }
}

/// Run one interactive session against the calendar backend.
pub fn run<B: CalendarBackend>(backend: &B, config: &Config) -> Result<(), RoomscoutError> {
    let include_informal = crate::prompt::ask_include_informal()?;

    println!(
        "Loading rooms for {} directory prefixes.",
        config.room_prefixes.len()
    );
    let rooms = load_rooms(backend, config, include_informal)?;
    println!("{} bookable rooms found.", rooms.len());

    let today = Local::now().date_naive();
    let day = crate::prompt::ask_meeting_date(today)?;
    println!(
        "Looking for rooms on {}",
        day.format("%d/%m/%Y").to_string().white()
    );

    let schedules = fetch_schedules(backend, &rooms, day, config)?;
    let free = search_availability(&schedules, day, config)?;

    let choices: Vec<RoomChoice> = free.into_iter().map(RoomChoice).collect();
    let RoomChoice(availability) = Select::new("Choose a room?", choices).prompt()?;

    let slot = if availability.slots.len() == 1 {
        let only = availability.slots[0];
        println!("Only one slot fits: {}", format_range(&only));
        only
    } else {
        let options: Vec<SlotChoice> = availability.slots.iter().copied().map(SlotChoice).collect();
        let message = format!("Choose a time slot for {}?", availability.room.display_name);
        let SlotChoice(slot) = Select::new(&message, options).prompt()?;
        slot
    };

    let subject = crate::prompt::ask_subject()?;

    let confirmed = Confirm::new(&format!(
        "Book {} for {}?",
        availability.room.display_name,
        format_range(&slot)
    ))
    .with_default(true)
    .prompt()?;
    if !confirmed {
        println!("Nothing booked.");
        return Ok(());
    }

    backend.create_meeting(&availability.room.email, slot.start, slot.end, &subject)?;
    println!("{}", "All done".green());
    Ok(())
}
