//! Schedule (solution) model.
//!
//! A `Candidate` is one complete proposed timetable: an ordered list of
//! single-hour `ScheduleEntry` slots plus a lazily cached fitness score.
//! Candidates that violate exclusivity invariants are legal — they score
//! poorly instead of being rejected, because early generations of the
//! search are expected to be imperfect.

use serde::{Deserialize, Serialize};

/// One occupied hour slot.
///
/// A multi-hour session is represented as one entry per occupied hour,
/// never as a duration-bearing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day label.
    pub day: String,
    /// Hour slot index within the working window.
    pub hour: u32,
    /// Teacher name.
    pub teacher: String,
    /// Subject taught.
    pub subject: String,
    /// Room name.
    pub room: String,
}

impl ScheduleEntry {
    /// Creates a new entry.
    pub fn new(
        day: impl Into<String>,
        hour: u32,
        teacher: impl Into<String>,
        subject: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            hour,
            teacher: teacher.into(),
            subject: subject.into(),
            room: room.into(),
        }
    }
}

/// A candidate timetable with a cached fitness score.
///
/// `Clone` is a structural deep copy (value semantics); the running best
/// of a search is preserved this way. Any mutation of the entry list
/// invalidates the cached score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    entries: Vec<ScheduleEntry>,
    /// Cached fitness; recomputed on demand by the evaluator.
    #[serde(skip)]
    score: Option<f64>,
}

impl Candidate {
    /// Creates an empty candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a candidate from an entry list. The score is unset.
    pub fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        Self {
            entries,
            score: None,
        }
    }

    /// The occupied slots, in insertion order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of occupied hour slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends one entry, invalidating the cached score.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
        self.score = None;
    }

    /// Appends several entries, invalidating the cached score.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = ScheduleEntry>) {
        self.entries.extend(entries);
        self.score = None;
    }

    /// The cached fitness score, if one has been computed.
    pub fn cached_score(&self) -> Option<f64> {
        self.score
    }

    /// Stores a computed fitness score.
    pub fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }

    /// Total hours scheduled for a teacher.
    pub fn hours_for_teacher(&self, teacher: &str) -> u32 {
        self.entries.iter().filter(|e| e.teacher == teacher).count() as u32
    }

    /// Entries occupying a specific (day, hour).
    pub fn entries_at<'a>(
        &'a self,
        day: &'a str,
        hour: u32,
    ) -> impl Iterator<Item = &'a ScheduleEntry> {
        self.entries
            .iter()
            .filter(move |e| e.day == day && e.hour == hour)
    }
}
