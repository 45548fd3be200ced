//! Genetic-algorithm timetable generator.
//!
//! Assigns recurring teaching sessions to (day, hour, room) slots subject
//! to teacher availability, room exclusivity, and teacher exclusivity,
//! maximizing session coverage and a configurable quality score. The search
//! is a population-based heuristic: it returns the best schedule observed,
//! not a provably optimal one.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `Room`, `ScheduleEntry`,
//!   `Candidate`, `Constraint`, `ProblemInstance`
//! - **`validation`**: Problem-instance integrity checks, run once before
//!   any randomness is consumed
//! - **`ga`**: The optimization engine — fitness, seeding, lesson grouping,
//!   selection, crossover, mutation, and the generation loop
//! - **`stats`**: Coverage and load reporting over a computed schedule
//!
//! # Determinism
//!
//! Every component that samples randomness takes an explicit `&mut R: Rng`,
//! so a run is fully reproducible from a seed.
//!
//! # References
//!
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

pub mod ga;
pub mod models;
pub mod stats;
pub mod validation;
