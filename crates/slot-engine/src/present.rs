//! Compact textual rendering of slot lists.

use crate::slots::AvailabilitySlot;

/// Render a slot as `"HH:MM-HH:MM"`.
pub fn format_range(slot: &AvailabilitySlot) -> String {
    format!(
        "{}-{}",
        slot.start.format("%H:%M"),
        slot.end.format("%H:%M")
    )
}

/// Render up to `max_shown` leading slots joined by `", "`, suffixed with a
/// count of the remainder when truncated. An empty sequence renders as
/// `"none"`.
pub fn describe_slots(slots: &[AvailabilitySlot], max_shown: usize) -> String {
    if slots.is_empty() {
        return "none".to_string();
    }

    let shown: Vec<String> = slots.iter().take(max_shown).map(format_range).collect();
    let mut out = shown.join(", ");
    if slots.len() > max_shown {
        out.push_str(&format!(" and {} more", slots.len() - max_shown));
    }
    out
}
