//! # slot-engine
//!
//! Availability matching for meeting-room booking.
//!
//! Given a set of rooms, each with a list of busy intervals for one day, and
//! a preferred time window plus a meeting duration, the engine enumerates all
//! candidate booking slots at a fixed granularity. Everything here operates
//! on plain data in a single fixed timezone (the viewer's local wall clock);
//! directory lookup, free/busy retrieval and invitation dispatch belong to
//! the calling layer.
//!
//! ## Modules
//!
//! - [`filter`] — decide whether a directory display name denotes a bookable room
//! - [`interval`] — busy intervals and the overlap predicate
//! - [`slots`] — fixed-step scan producing candidate slots per room
//! - [`present`] — compact textual rendering of slot lists
//! - [`error`] — error types

pub mod error;
pub mod filter;
pub mod interval;
pub mod present;
pub mod slots;

pub use error::SlotError;
pub use filter::{is_bookable_room, FilterOptions, DEFAULT_MIN_CAPACITY};
pub use interval::{no_overlap, BusyInterval};
pub use present::{describe_slots, format_range};
pub use slots::{
    compute_slots, find_free_rooms, AvailabilitySlot, PreferenceWindow, Room, RoomAvailability,
    RoomSchedule, DEFAULT_INCREMENT_MINUTES,
};
