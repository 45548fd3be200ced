//! Timetabling domain models.
//!
//! Immutable descriptions of the problem (teachers, rooms, working window,
//! constraints) and the slot-level representation of a solution. A session
//! spanning several hours is stored as one `ScheduleEntry` per occupied
//! hour; conflict checks and repair operate at single-hour granularity and
//! contiguous lesson blocks are reconstructed on demand by the engine.

mod constraint;
mod instance;
mod room;
mod schedule;
mod teacher;

pub use constraint::Constraint;
pub use instance::ProblemInstance;
pub use room::Room;
pub use schedule::{Candidate, ScheduleEntry};
pub use teacher::Teacher;
