//! Coverage and load reporting.
//!
//! Pure summaries over a computed candidate: how much of each teacher's
//! demand was met, and how entries distribute over rooms, days, and
//! hours. Unmet demand is not an error anywhere in the engine — it is
//! reported here as a completion percentage and left to the caller.

use serde::{Deserialize, Serialize};

use crate::models::{Candidate, ProblemInstance};

/// Scheduled-versus-required hours for one teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherCoverage {
    /// Teacher name.
    pub name: String,
    /// Hours scheduled in the candidate.
    pub scheduled_hours: u32,
    /// Hours demanded by the instance.
    pub required_hours: u32,
}

impl TeacherCoverage {
    /// Completion ratio in `[0, 1]` (may exceed 1 if over-scheduled).
    pub fn ratio(&self) -> f64 {
        if self.required_hours == 0 {
            0.0
        } else {
            f64::from(self.scheduled_hours) / f64::from(self.required_hours)
        }
    }
}

/// Quality summary of a candidate against its instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Per-teacher coverage, in instance order.
    pub teachers: Vec<TeacherCoverage>,
    /// Entry count per room, in instance order.
    pub room_load: Vec<(String, usize)>,
    /// Entry count per active day, in instance order.
    pub day_load: Vec<(String, usize)>,
    /// Entry count per working hour, ascending.
    pub hour_load: Vec<(u32, usize)>,
}

impl CoverageReport {
    /// Builds the report for a candidate.
    pub fn build(instance: &ProblemInstance, candidate: &Candidate) -> Self {
        let teachers = instance
            .teachers
            .iter()
            .map(|t| TeacherCoverage {
                name: t.name.clone(),
                scheduled_hours: candidate.hours_for_teacher(&t.name),
                required_hours: t.required_hours(),
            })
            .collect();

        let room_load = instance
            .rooms
            .iter()
            .map(|r| {
                let count = candidate.entries().iter().filter(|e| e.room == r.name).count();
                (r.name.clone(), count)
            })
            .collect();

        let day_load = instance
            .days
            .iter()
            .map(|d| {
                let count = candidate.entries().iter().filter(|e| e.day == *d).count();
                (d.clone(), count)
            })
            .collect();

        let hour_load = (instance.start_hour..instance.end_hour)
            .map(|h| {
                let count = candidate.entries().iter().filter(|e| e.hour == h).count();
                (h, count)
            })
            .collect();

        Self {
            teachers,
            room_load,
            day_load,
            hour_load,
        }
    }

    /// Overall completion: total scheduled hours over total required hours.
    pub fn overall_ratio(&self) -> f64 {
        let required: u32 = self.teachers.iter().map(|t| t.required_hours).sum();
        if required == 0 {
            return 0.0;
        }
        let scheduled: u32 = self.teachers.iter().map(|t| t.scheduled_hours).sum();
        f64::from(scheduled) / f64::from(required)
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
                    .with_sessions(1)
                    .with_availability("Monday", vec![9]),
            )
            .with_teacher(
                Teacher::new("Sara", "Physics")
                    .with_sessions(1)
                    .with_availability("Monday", vec![9]),
            )
            .with_room(Room::new("R1"))
    }

    #[test]
    fn test_contended_coverage_is_half() {
        let instance = sample_instance();
        let candidate = Candidate::from_entries(vec![ScheduleEntry::new(
            "Monday", 9, "Ahmed", "Math", "R1",
        )]);

        let report = CoverageReport::build(&instance, &candidate);
        assert!((report.overall_ratio() - 0.5).abs() < 1e-10);
        assert!((report.teachers[0].ratio() - 1.0).abs() < 1e-10);
        assert!((report.teachers[1].ratio() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_counts() {
        let instance = sample_instance();
        let candidate = Candidate::from_entries(vec![
            ScheduleEntry::new("Monday", 9, "Ahmed", "Math", "R1"),
            ScheduleEntry::new("Monday", 10, "Sara", "Physics", "R1"),
        ]);

        let report = CoverageReport::build(&instance, &candidate);
        assert_eq!(report.room_load, vec![("R1".to_string(), 2)]);
        assert_eq!(report.day_load, vec![("Monday".to_string(), 2)]);
        assert_eq!(report.hour_load, vec![(9, 1), (10, 1), (11, 0)]);
    }

    #[test]
    fn test_empty_candidate_reports_zero() {
        let instance = sample_instance();
        let report = CoverageReport::build(&instance, &Candidate::new());
        assert!((report.overall_ratio() - 0.0).abs() < 1e-10);
    }
}
