//! The optimization engine.
//!
//! Population-based stochastic search over candidate timetables:
//!
//! 1. **Seed** — randomized, mostly-valid candidates built from scratch
//! 2. **Evaluate** — completion score plus constraint contributions
//! 3. **Rank** — descending by score; best-ever deep-copied on improvement
//! 4. **Breed** — elitist survival, resampling, then selection →
//!    lesson-aware crossover → repair-oriented mutation
//!
//! Candidates with exclusivity violations are never rejected outright;
//! hard-constraint penalties push the population toward conflict-free
//! schedules over generations.
//!
//! # Reference
//! Eiben & Smith (2015), "Introduction to Evolutionary Computing", Ch. 3

mod conflict;
mod fitness;
mod lessons;
mod operators;
mod search;
mod seed;

pub use conflict::{find_available_room, has_conflict};
pub use fitness::Evaluator;
pub use lessons::{group_lessons, LessonBlock};
pub use operators::{crossover, mutate, select_parent};
pub use search::{CancelToken, GeneticSearch, SearchOutcome, SearchParams};
pub use seed::generate_candidate;
