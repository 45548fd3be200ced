//! Teacher model.
//!
//! A teacher is the demand side of the problem: a subject, a number of
//! required sessions, a per-session duration in whole hours, and an
//! availability map from day label to the hours the teacher can start
//! or continue a lesson.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A teacher with a recurring session demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher name (identity key).
    pub name: String,
    /// Subject taught in every session.
    pub subject: String,
    /// Number of sessions that must be scheduled.
    pub required_sessions: u32,
    /// Duration of one session in whole hours.
    pub session_duration: u32,
    /// Day label → hours the teacher is available on that day.
    pub availability: HashMap<String, Vec<u32>>,
}

impl Teacher {
    /// Creates a teacher with one required one-hour session and no availability.
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            required_sessions: 1,
            session_duration: 1,
            availability: HashMap::new(),
        }
    }

    /// Sets the number of required sessions.
    pub fn with_sessions(mut self, sessions: u32) -> Self {
        self.required_sessions = sessions;
        self
    }

    /// Sets the session duration in hours.
    pub fn with_duration(mut self, hours: u32) -> Self {
        self.session_duration = hours;
        self
    }

    /// Sets the available hours for a day.
    pub fn with_availability(mut self, day: impl Into<String>, hours: Vec<u32>) -> Self {
        self.availability.insert(day.into(), hours);
        self
    }

    /// Total hour demand: `required_sessions * session_duration`.
    pub fn required_hours(&self) -> u32 {
        self.required_sessions * self.session_duration
    }

    /// Whether the teacher declared availability at (day, hour).
    pub fn is_available(&self, day: &str, hour: u32) -> bool {
        self.availability
            .get(day)
            .is_some_and(|hours| hours.contains(&hour))
    }

    /// Active days on which the teacher has at least one available hour.
    ///
    /// Returned in `active` order so day sampling is stable for a fixed
    /// random stream.
    pub fn available_days<'a>(&self, active: &'a [String]) -> Vec<&'a str> {
        active
            .iter()
            .filter(|day| {
                self.availability
                    .get(day.as_str())
                    .is_some_and(|hours| !hours.is_empty())
            })
            .map(|day| day.as_str())
            .collect()
    }
}
