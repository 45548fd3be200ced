//! Scoring constraints.
//!
//! Every constraint is a predicate over a whole candidate returning a
//! numeric score adjustment. Hard constraints (double-booking, banned
//! slots) return large negative penalties but never reject a candidate
//! structurally; soft constraints shape preference among feasible
//! schedules. Adding a new rule kind is an enum extension evaluated by
//! the single [`Constraint::evaluate`] dispatch.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Candidate, ProblemInstance};

/// Penalty per duplicate (teacher|room, day, hour) key.
const DOUBLE_BOOKING_PENALTY: f64 = -100.0;
/// Reward per entry inside the teacher's declared availability.
const AVAILABILITY_REWARD: f64 = 5.0;
/// Scale applied to the variance of per-day entry counts.
const LOAD_BALANCE_SCALE: f64 = -2.0;
/// Penalty when a banned (entity, day, hour) triple is occupied.
const BANNED_SLOT_PENALTY: f64 = -1000.0;

/// A scoring rule over a candidate timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// Hard: no teacher may occupy two entries at the same (day, hour).
    DoubleBookingTeacher,
    /// Hard: no room may host two entries at the same (day, hour).
    DoubleBookingRoom,
    /// Soft: rewards entries placed inside the teacher's availability.
    AvailabilityReward,
    /// Soft: rewards an even spread of entries across active days.
    LoadBalanceReward,
    /// Hard: the named teacher must not teach at (day, hour).
    BannedTeacherSlot {
        teacher: String,
        day: String,
        hour: u32,
    },
    /// Hard: the named subject must not be taught at (day, hour).
    BannedSubjectSlot {
        subject: String,
        day: String,
        hour: u32,
    },
}

impl Constraint {
    /// The built-in rules active for every search.
    pub fn defaults() -> Vec<Constraint> {
        vec![
            Constraint::DoubleBookingTeacher,
            Constraint::DoubleBookingRoom,
            Constraint::AvailabilityReward,
            Constraint::LoadBalanceReward,
        ]
    }

    /// Scores this rule over a candidate. Pure; order of evaluation
    /// against other rules does not matter.
    pub fn evaluate(&self, candidate: &Candidate, instance: &ProblemInstance) -> f64 {
        match self {
            Constraint::DoubleBookingTeacher => {
                duplicate_penalty(candidate, |e| (e.teacher.as_str(), e.day.as_str(), e.hour))
            }
            Constraint::DoubleBookingRoom => {
                duplicate_penalty(candidate, |e| (e.room.as_str(), e.day.as_str(), e.hour))
            }
            Constraint::AvailabilityReward => candidate
                .entries()
                .iter()
                .filter(|e| {
                    instance
                        .teacher(&e.teacher)
                        .is_some_and(|t| t.is_available(&e.day, e.hour))
                })
                .count() as f64
                * AVAILABILITY_REWARD,
            Constraint::LoadBalanceReward => {
                day_load_variance(candidate, &instance.days) * LOAD_BALANCE_SCALE
            }
            Constraint::BannedTeacherSlot { teacher, day, hour } => {
                let hit = candidate
                    .entries()
                    .iter()
                    .any(|e| e.teacher == *teacher && e.day == *day && e.hour == *hour);
                if hit { BANNED_SLOT_PENALTY } else { 0.0 }
            }
            Constraint::BannedSubjectSlot { subject, day, hour } => {
                let hit = candidate
                    .entries()
                    .iter()
                    .any(|e| e.subject == *subject && e.day == *day && e.hour == *hour);
                if hit { BANNED_SLOT_PENALTY } else { 0.0 }
            }
        }
    }
}

/// -100 per entry whose key was already seen.
fn duplicate_penalty<'a, K, F>(candidate: &'a Candidate, key: F) -> f64
where
    K: std::hash::Hash + Eq,
    F: Fn(&'a super::ScheduleEntry) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();
    let mut score = 0.0;
    for entry in candidate.entries() {
        if !seen.insert(key(entry)) {
            score += DOUBLE_BOOKING_PENALTY;
        }
    }
    score
}

/// Population variance of per-day entry counts over all active days.
///
/// Days without entries count as zero, so concentrating every session
/// on one day of a five-day week is penalized.
fn day_load_variance(candidate: &Candidate, days: &[String]) -> f64 {
    if days.is_empty() {
        return 0.0;
    }
    let counts: Vec<f64> = days
        .iter()
        .map(|day| candidate.entries().iter().filter(|e| e.day == *day).count() as f64)
        .collect();
    let mean = counts.iter().sum::<f64>() / counts.len() as f64;
    counts.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / counts.len() as f64
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::DoubleBookingTeacher => write!(f, "no teacher double-booking"),
            Constraint::DoubleBookingRoom => write!(f, "no room double-booking"),
            Constraint::AvailabilityReward => write!(f, "prefer declared availability"),
            Constraint::LoadBalanceReward => write!(f, "prefer even day load"),
            Constraint::BannedTeacherSlot { teacher, day, hour } => {
                write!(f, "teacher '{teacher}' banned on {day} at {hour}:00")
            }
            Constraint::BannedSubjectSlot { subject, day, hour } => {
                write!(f, "subject '{subject}' banned on {day} at {hour}:00")
            }
        }
    }
}
