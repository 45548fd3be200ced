//! Fitness evaluation.
//!
//! `score = completion * 2 + Σ constraint contributions`, where completion
//! is the average per-teacher `scheduled / required` hour ratio over
//! teachers with at least one scheduled hour, scaled to 0–100. Teachers
//! with nothing scheduled are excluded from the average; the schedule is
//! already penalized for them through the lower completion elsewhere.
//! This exclusion is a policy choice inherited from the problem owner,
//! not a structural necessity.
//!
//! Hard constraints participate as steep negative terms in the same sum
//! rather than as a gating stage, so structurally imperfect candidates
//! survive ranking with low scores instead of being discarded.

use crate::models::{Candidate, Constraint, ProblemInstance};

/// Weight applied to the 0–100 completion score.
const COMPLETION_WEIGHT: f64 = 2.0;

/// Scores candidates against an instance's active constraint set.
///
/// Pure: the same candidate and instance always produce the same score,
/// irrespective of call order. Caching lives on [`Candidate`], not here.
#[derive(Debug)]
pub struct Evaluator<'a> {
    instance: &'a ProblemInstance,
    constraints: Vec<Constraint>,
}

impl<'a> Evaluator<'a> {
    /// Builds the active constraint set: built-ins plus the instance's
    /// user-authored banned-slot rules.
    pub fn new(instance: &'a ProblemInstance) -> Self {
        let mut constraints = Constraint::defaults();
        constraints.extend(instance.constraints.iter().cloned());
        Self {
            instance,
            constraints,
        }
    }

    /// The rules applied to every candidate.
    pub fn active_constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Scores a candidate. An empty schedule is unusable: `-inf`.
    pub fn score(&self, candidate: &Candidate) -> f64 {
        if candidate.is_empty() {
            return f64::NEG_INFINITY;
        }

        let constraint_score: f64 = self
            .constraints
            .iter()
            .map(|c| c.evaluate(candidate, self.instance))
            .sum();

        self.completion_score(candidate) * COMPLETION_WEIGHT + constraint_score
    }

    /// Average completion ratio over teachers with ≥1 scheduled hour,
    /// scaled to 0–100.
    fn completion_score(&self, candidate: &Candidate) -> f64 {
        let mut ratio_sum = 0.0;
        let mut teachers_with_lessons = 0u32;

        for teacher in &self.instance.teachers {
            let scheduled = candidate.hours_for_teacher(&teacher.name);
            if scheduled > 0 {
                ratio_sum += scheduled as f64 / teacher.required_hours() as f64;
                teachers_with_lessons += 1;
            }
        }

        if teachers_with_lessons == 0 {
            0.0
        } else {
            ratio_sum / teachers_with_lessons as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Room, ScheduleEntry, Teacher};

    fn sample_instance() -> ProblemInstance {
        ProblemInstance::new(vec!["Monday".into()], 9, 12)
            .with_teacher(
                Teacher::new("Ahmed", "Math")
                    .with_sessions(2)
                    .with_availability("Monday", vec![9, 10, 11]),
            )
            .with_room(Room::new("R1"))
    }

    fn entry(hour: u32) -> ScheduleEntry {
        ScheduleEntry::new("Monday", hour, "Ahmed", "Math", "R1")
    }

    #[test]
    fn test_empty_schedule_is_unusable() {
        let instance = sample_instance();
        let evaluator = Evaluator::new(&instance);
        assert_eq!(evaluator.score(&Candidate::new()), f64::NEG_INFINITY);
    }

    #[test]
    fn test_fully_scheduled_score() {
        let instance = sample_instance();
        let evaluator = Evaluator::new(&instance);
        let candidate = Candidate::from_entries(vec![entry(9), entry(10)]);

        // Completion 100 × 2 + availability 2 × 5 + day variance 0
        assert!((evaluator.score(&candidate) - 210.0).abs() < 1e-10);
    }

    #[test]
    fn test_score_is_pure() {
        let instance = sample_instance();
        let evaluator = Evaluator::new(&instance);
        let candidate = Candidate::from_entries(vec![entry(9)]);

        let first = evaluator.score(&candidate);
        let second = evaluator.score(&candidate);
        assert_eq!(first, second);
    }

    #[test]
    fn test_double_booking_reduces_score() {
        let instance = sample_instance();
        let evaluator = Evaluator::new(&instance);

        let clean = Candidate::from_entries(vec![entry(9), entry(10)]);
        let clashing = Candidate::from_entries(vec![entry(9), entry(9)]);
        assert!(evaluator.score(&clashing) < evaluator.score(&clean));
    }

    #[test]
    fn test_unserved_teacher_excluded_from_average() {
        let instance = sample_instance().with_teacher(
            Teacher::new("Sara", "Physics")
                .with_sessions(1)
                .with_availability("Monday", vec![9]),
        );
        let evaluator = Evaluator::new(&instance);

        // Ahmed fully scheduled, Sara not at all: the completion average
        // covers Ahmed only and still reads 100%.
        let candidate = Candidate::from_entries(vec![entry(9), entry(10)]);
        assert!((evaluator.score(&candidate) - 210.0).abs() < 1e-10);
    }

    #[test]
    fn test_user_constraint_applies() {
        let instance = sample_instance().with_constraint(Constraint::BannedTeacherSlot {
            teacher: "Ahmed".into(),
            day: "Monday".into(),
            hour: 9,
        });
        let evaluator = Evaluator::new(&instance);
        assert_eq!(evaluator.active_constraints().len(), 5);

        let banned = Candidate::from_entries(vec![entry(9), entry(10)]);
        let allowed = Candidate::from_entries(vec![entry(10), entry(11)]);
        assert!(evaluator.score(&banned) < evaluator.score(&allowed) - 900.0);
    }
}
