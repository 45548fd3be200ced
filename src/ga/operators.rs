//! Selection, crossover, and mutation.
//!
//! - **Selection**: biased toward an elite pool of the top fifth of the
//!   ranked population, falling back to a tournament of five for
//!   diversity pressure.
//! - **Crossover**: lesson-aware — both parents are decomposed into
//!   lesson blocks, the combined list is shuffled, and blocks are
//!   greedily accepted into the child only when conflict-free. Rejected
//!   blocks are dropped; the mutator repairs the resulting coverage loss.
//! - **Mutation**: repair-oriented — finds the most underserved teacher
//!   and either places one missing session or relocates one existing
//!   lesson, making at most one structural change per call.

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use super::conflict::{find_available_room, has_conflict};
use super::lessons::{group_lessons, LessonBlock};
use super::seed::attempt_placement;
use crate::models::{Candidate, ProblemInstance, ScheduleEntry, Teacher};

/// Probability of drawing from the elite pool instead of a tournament.
const ELITE_BIAS: f64 = 0.8;
/// Fraction of the ranked population forming the elite pool.
const ELITE_FRACTION: f64 = 0.2;
/// Tournament size (drawn with repetition).
const TOURNAMENT_SIZE: usize = 5;
/// Probability that a child is mutated at all.
const MUTATION_RATE: f64 = 0.7;
/// Per-teacher chance of attempting a lesson relocation.
const RELOCATE_CHANCE: f64 = 0.5;
/// Placement attempt budget for one repair.
const REPAIR_ATTEMPTS: u32 = 10;

/// Picks a parent from a population ranked descending by score.
///
/// With probability 0.8 (populations larger than five only) a uniform
/// draw from the top 20%; otherwise the best of five uniform draws.
///
/// # Panics
/// Panics if `population` is empty; the controller never calls it so.
pub fn select_parent<'a, R: Rng>(population: &'a [Candidate], rng: &mut R) -> &'a Candidate {
    if population.len() > 5 && rng.random_bool(ELITE_BIAS) {
        let cut = ((population.len() as f64 * ELITE_FRACTION) as usize).max(1);
        return &population[rng.random_range(0..cut)];
    }

    let mut best = &population[rng.random_range(0..population.len())];
    for _ in 1..TOURNAMENT_SIZE {
        let challenger = &population[rng.random_range(0..population.len())];
        if cached(challenger) > cached(best) {
            best = challenger;
        }
    }
    best
}

fn cached(candidate: &Candidate) -> f64 {
    candidate.cached_score().unwrap_or(f64::NEG_INFINITY)
}

/// Merges lesson blocks from two parents into a conflict-free child.
///
/// The child may cover strictly less than either parent when overlapping
/// blocks are dropped.
pub fn crossover<R: Rng>(parent1: &Candidate, parent2: &Candidate, rng: &mut R) -> Candidate {
    let mut blocks = group_lessons(parent1.entries());
    blocks.extend(group_lessons(parent2.entries()));
    blocks.shuffle(rng);

    let mut child = Candidate::new();
    for block in &blocks {
        let fits = block
            .entries
            .iter()
            .all(|e| !has_conflict(child.entries(), &e.day, e.hour, &e.room, &e.teacher));
        if fits {
            child.extend(block.entries.iter().cloned());
        }
    }
    child
}

/// Mutates a child with probability 0.7; otherwise passes it through.
///
/// When applied, walks teachers sorted most-underserved first. The first
/// teacher still under quota gets one placement attempt; independently,
/// each visited teacher has a 50% chance of one relocation attempt. The
/// pass stops at the first successful change, so at most one structural
/// change is made per call.
pub fn mutate<R: Rng>(child: Candidate, instance: &ProblemInstance, rng: &mut R) -> Candidate {
    if !rng.random_bool(MUTATION_RATE) {
        return child;
    }
    let mut child = child;

    // Snapshot coverage ratios once, then repair most-underserved first.
    let mut order: Vec<(&Teacher, f64)> = instance
        .teachers
        .iter()
        .map(|t| {
            let required = t.required_hours().max(1) as f64;
            let scheduled = child.hours_for_teacher(&t.name) as f64;
            (t, scheduled / required)
        })
        .collect();
    order.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    for (teacher, _) in order {
        if child.hours_for_teacher(&teacher.name) < teacher.required_hours()
            && try_add_lesson(&mut child, teacher, instance, rng)
        {
            break;
        }

        if rng.random_bool(RELOCATE_CHANCE) {
            if let Some(relocated) = try_relocate_lesson(&child, teacher, instance, rng) {
                child = relocated;
                break;
            }
        }
    }

    child
}

/// Attempts to place one missing session within the repair budget.
fn try_add_lesson<R: Rng>(
    child: &mut Candidate,
    teacher: &Teacher,
    instance: &ProblemInstance,
    rng: &mut R,
) -> bool {
    for _ in 0..REPAIR_ATTEMPTS {
        if attempt_placement(child, teacher, instance, rng) {
            return true;
        }
    }
    false
}

/// Attempts to move one of the teacher's lessons to a different slot.
///
/// The moved block must be conflict-free against the rest of the
/// schedule. Returns a freshly built candidate instead of splicing the
/// input in place, so survivors referenced elsewhere are never aliased
/// into a half-updated state.
fn try_relocate_lesson<R: Rng>(
    child: &Candidate,
    teacher: &Teacher,
    instance: &ProblemInstance,
    rng: &mut R,
) -> Option<Candidate> {
    let blocks: Vec<LessonBlock> = group_lessons(child.entries())
        .into_iter()
        .filter(|b| b.teacher() == teacher.name)
        .collect();
    if blocks.is_empty() {
        return None;
    }

    let block = &blocks[rng.random_range(0..blocks.len())];
    let duration = block.duration();
    let subject = &block.entries[0].subject;

    let rest: Vec<ScheduleEntry> = child
        .entries()
        .iter()
        .enumerate()
        .filter(|(i, _)| !block.indices.contains(i))
        .map(|(_, e)| e.clone())
        .collect();

    for day in &instance.days {
        let Some(hours) = teacher.availability.get(day) else {
            continue;
        };
        for &start in hours {
            if start + duration > instance.end_hour {
                continue;
            }
            let Some(room) = find_available_room(
                &rest,
                &instance.rooms,
                day,
                start,
                duration,
                &teacher.name,
                rng,
            ) else {
                continue;
            };

            let room = room.to_string();
            let mut rebuilt = rest;
            for hour in start..start + duration {
                rebuilt.push(ScheduleEntry::new(
                    day.as_str(),
                    hour,
                    teacher.name.as_str(),
                    subject.as_str(),
                    room.as_str(),
                ));
            }
            return Some(Candidate::from_entries(rebuilt));
        }
    }

    None
}
