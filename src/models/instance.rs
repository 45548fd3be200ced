//! Problem instance: the full immutable input to one search.

use serde::{Deserialize, Serialize};

use super::{Constraint, Room, Teacher};

/// The complete description of a timetabling problem.
///
/// Holds the active days (in reporting order), the half-open working
/// window `[start_hour, end_hour)`, the teachers and rooms, and any
/// user-authored banned-slot constraints. Built-in constraints are
/// always active and do not appear here; see [`Constraint::defaults`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// Active day labels, in stable reporting order.
    pub days: Vec<String>,
    /// First working hour (inclusive).
    pub start_hour: u32,
    /// Last working hour (exclusive).
    pub end_hour: u32,
    /// Teachers with their session demand and availability.
    pub teachers: Vec<Teacher>,
    /// Rooms available in every working hour.
    pub rooms: Vec<Room>,
    /// User-authored constraints, already reduced to banned-slot predicates.
    pub constraints: Vec<Constraint>,
}

impl ProblemInstance {
    /// Creates an instance with a working window and no teachers or rooms.
    pub fn new(days: Vec<String>, start_hour: u32, end_hour: u32) -> Self {
        Self {
            days,
            start_hour,
            end_hour,
            teachers: Vec::new(),
            rooms: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Adds a teacher.
    pub fn with_teacher(mut self, teacher: Teacher) -> Self {
        self.teachers.push(teacher);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a user-authored constraint.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Looks up a teacher by name.
    pub fn teacher(&self, name: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.name == name)
    }

    /// Total hour demand across all teachers.
    pub fn total_required_hours(&self) -> u32 {
        self.teachers.iter().map(Teacher::required_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_instance() -> ProblemInstance {
        ProblemInstance::new(vec!["Monday".into(), "Tuesday".into()], 9, 14)
            .with_teacher(
                Teacher::new("Ahmed", "Math")
                    .with_sessions(2)
                    .with_duration(2)
                    .with_availability("Monday", vec![9, 10]),
            )
            .with_teacher(
                Teacher::new("Sara", "Physics")
                    .with_sessions(3)
                    .with_availability("Tuesday", vec![11]),
            )
            .with_room(Room::new("R1"))
            .with_constraint(Constraint::BannedTeacherSlot {
                teacher: "Ahmed".into(),
                day: "Monday".into(),
                hour: 9,
            })
    }

    #[test]
    fn test_teacher_lookup() {
        let instance = sample_instance();
        assert_eq!(instance.teacher("Ahmed").unwrap().subject, "Math");
        assert!(instance.teacher("Nobody").is_none());
    }

    #[test]
    fn test_total_required_hours() {
        let instance = sample_instance();
        // Ahmed 2×2 + Sara 3×1
        assert_eq!(instance.total_required_hours(), 7);
    }

    #[test]
    fn test_serde_round_trip() {
        let instance = sample_instance();
        let json = serde_json::to_string(&instance).unwrap();
        let back: ProblemInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(back.days, instance.days);
        assert_eq!(back.start_hour, 9);
        assert_eq!(back.end_hour, 14);
        assert_eq!(back.teachers.len(), 2);
        assert_eq!(back.rooms, instance.rooms);
        assert_eq!(back.constraints, instance.constraints);
    }
}
