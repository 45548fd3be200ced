//! Slot conflict detection.
//!
//! The single source of truth for "can this entry go here": a placement
//! collides when an existing entry occupies the same (day, hour) with
//! either the same room or the same teacher. Pure and O(n) per call;
//! callers batch checks across a candidate hour range.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Room, ScheduleEntry};

/// Whether placing (day, hour, room, teacher) collides with `entries`.
pub fn has_conflict(
    entries: &[ScheduleEntry],
    day: &str,
    hour: u32,
    room: &str,
    teacher: &str,
) -> bool {
    entries
        .iter()
        .any(|e| e.day == day && e.hour == hour && (e.room == room || e.teacher == teacher))
}

/// Finds a room free for `[start_hour, start_hour + duration)` on `day`.
///
/// Rooms are probed in uniformly random order so repeated seeding does
/// not pile every lesson into the first room. Returns `None` when every
/// room collides somewhere in the range.
pub fn find_available_room<'a, R: Rng>(
    entries: &[ScheduleEntry],
    rooms: &'a [Room],
    day: &str,
    start_hour: u32,
    duration: u32,
    teacher: &str,
    rng: &mut R,
) -> Option<&'a str> {
    let mut order: Vec<&Room> = rooms.iter().collect();
    order.shuffle(rng);

    order
        .into_iter()
        .find(|room| {
            (start_hour..start_hour + duration)
                .all(|hour| !has_conflict(entries, day, hour, &room.name, teacher))
        })
        .map(|room| room.name.as_str())
}
