//! Seed candidate construction.
//!
//! Builds one randomized, mostly-valid candidate from an empty schedule
//! in two passes per teacher: a single placement attempt to spread some
//! coverage, then a bounded repair loop that keeps trying to place the
//! remaining required sessions. There is no backtracking — a failed
//! attempt is abandoned and retried fresh, so coverage is probabilistic
//! rather than guaranteed.

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::conflict::find_available_room;
use crate::models::{Candidate, ProblemInstance, ScheduleEntry, Teacher};

/// Repair-pass attempt budget per teacher per candidate.
const SEED_ATTEMPTS: u32 = 50;

/// Builds one seed candidate for generation zero or backfill.
pub fn generate_candidate<R: Rng>(instance: &ProblemInstance, rng: &mut R) -> Candidate {
    let mut candidate = Candidate::new();

    // Pass 1: one attempt per teacher, seeding initial coverage.
    for teacher in &instance.teachers {
        attempt_placement(&mut candidate, teacher, instance, rng);
    }

    // Pass 2: repair toward full demand within the attempt budget.
    for teacher in &instance.teachers {
        let placed_sessions =
            candidate.hours_for_teacher(&teacher.name) / teacher.session_duration.max(1);
        let mut remaining = teacher.required_sessions.saturating_sub(placed_sessions);

        let mut attempts = 0;
        while remaining > 0 && attempts < SEED_ATTEMPTS {
            attempts += 1;
            if attempt_placement(&mut candidate, teacher, instance, rng) {
                remaining -= 1;
            }
        }
    }

    candidate
}

/// One randomized placement attempt for a single session.
///
/// Picks a uniformly random available day and start hour, rejects starts
/// that would overrun the working window, then probes rooms in random
/// order. On success appends one entry per occupied hour and returns
/// `true`; any failure abandons the attempt.
pub(crate) fn attempt_placement<R: Rng>(
    candidate: &mut Candidate,
    teacher: &Teacher,
    instance: &ProblemInstance,
    rng: &mut R,
) -> bool {
    let days = teacher.available_days(&instance.days);
    let Some(&day) = days.choose(rng) else {
        return false;
    };

    let hours = &teacher.availability[day];
    let Some(&start) = hours.choose(rng) else {
        return false;
    };

    if start + teacher.session_duration > instance.end_hour {
        return false;
    }

    let Some(room) = find_available_room(
        candidate.entries(),
        &instance.rooms,
        day,
        start,
        teacher.session_duration,
        &teacher.name,
        rng,
    ) else {
        return false;
    };

    let room = room.to_string();
    for hour in start..start + teacher.session_duration {
        candidate.push(ScheduleEntry::new(
            day,
            hour,
            teacher.name.as_str(),
            teacher.subject.as_str(),
            room.as_str(),
        ));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::has_conflict;
    use crate::models::Room;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_instance() -> ProblemInstance {
        ProblemInstance::new(vec!["Monday".into(), "Tuesday".into()], 9, 14)
            .with_teacher(
                Teacher::new("Ahmed", "Math")
                    .with_sessions(2)
                    .with_duration(2)
                    .with_availability("Monday", vec![9, 10, 11])
                    .with_availability("Tuesday", vec![9, 10]),
            )
            .with_teacher(
                Teacher::new("Sara", "Physics")
                    .with_sessions(3)
                    .with_availability("Monday", vec![9, 10, 11, 12])
                    .with_availability("Tuesday", vec![11, 12]),
            )
            .with_room(Room::new("R1"))
            .with_room(Room::new("R2"))
    }

    /// No entry may collide with the rest of the same candidate.
    fn assert_conflict_free(candidate: &Candidate) {
        let entries = candidate.entries();
        for (i, e) in entries.iter().enumerate() {
            let rest: Vec<_> = entries
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, e)| e.clone())
                .collect();
            assert!(
                !has_conflict(&rest, &e.day, e.hour, &e.room, &e.teacher),
                "seed produced a colliding entry: {e:?}"
            );
        }
    }

    #[test]
    fn test_seed_is_conflict_free() {
        let instance = sample_instance();
        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let candidate = generate_candidate(&instance, &mut rng);
            assert_conflict_free(&candidate);
        }
    }

    #[test]
    fn test_seed_respects_window_and_demand() {
        let instance = sample_instance();
        let mut rng = SmallRng::seed_from_u64(7);
        let candidate = generate_candidate(&instance, &mut rng);

        for e in candidate.entries() {
            assert!(e.hour >= instance.start_hour && e.hour < instance.end_hour);
        }
        for teacher in &instance.teachers {
            assert!(candidate.hours_for_teacher(&teacher.name) <= teacher.required_hours());
        }
    }

    #[test]
    fn test_seed_starts_inside_availability() {
        let instance = sample_instance();
        let mut rng = SmallRng::seed_from_u64(11);
        let candidate = generate_candidate(&instance, &mut rng);

        // Every lesson start hour must come from the teacher's declared
        // availability; continuation hours may extend past it.
        for block in crate::ga::group_lessons(candidate.entries()) {
            let first = &block.entries[0];
            let teacher = instance.teacher(&first.teacher).unwrap();
            assert!(teacher.is_available(&first.day, first.hour));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let instance = sample_instance();
        let a = generate_candidate(&instance, &mut SmallRng::seed_from_u64(3));
        let b = generate_candidate(&instance, &mut SmallRng::seed_from_u64(3));
        assert_eq!(a.entries(), b.entries());
    }

    #[test]
    fn test_attempt_rejects_window_overrun() {
        // Only start hour 13 with a 2-hour session in a [9, 14) window
        let instance = ProblemInstance::new(vec!["Monday".into()], 9, 14)
            .with_teacher(
                Teacher::new("Ahmed", "Math")
                    .with_duration(2)
                    .with_availability("Monday", vec![13]),
            )
            .with_room(Room::new("R1"));

        let mut rng = SmallRng::seed_from_u64(1);
        let candidate = generate_candidate(&instance, &mut rng);
        assert!(candidate.is_empty());
    }
}
