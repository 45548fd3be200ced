//! The generation loop.
//!
//! `INIT → (EVALUATE → RANK → maybe TERMINATE → BREED) → DONE`, single
//! run per [`GeneticSearch`]. One [`GeneticSearch::step`] call advances
//! exactly one generation, which makes it the natural cooperative yield
//! point for hosts that must stay responsive; [`GeneticSearch::run`]
//! simply loops `step` to completion. Cancellation is checked at
//! generation boundaries only.
//!
//! The sole external output is the best candidate observed across the
//! whole run, deep-copied whenever the ranked top improves on it.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fitness::Evaluator;
use super::operators::{crossover, mutate, select_parent};
use super::seed::generate_candidate;
use crate::models::{Candidate, ProblemInstance};
use crate::validation::{validate_instance, ValidationError, ValidationErrorKind};

/// Absolute "good enough" score; the search stops early on reaching it.
const TARGET_SCORE: f64 = 200.0;
/// Fraction of the ranked population kept unmodified each generation.
const SURVIVOR_FRACTION: f64 = 0.5;
/// Population fraction reached by resampling before breeding fills the rest.
const RESAMPLE_FRACTION: f64 = 0.7;
/// Progress is reported every this many generations.
const PROGRESS_INTERVAL: usize = 10;

/// Search-effort preset: population size and generation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Candidates per generation.
    pub population_size: usize,
    /// Maximum number of generations.
    pub generations: usize,
}

impl SearchParams {
    /// Creates explicit parameters.
    pub fn new(population_size: usize, generations: usize) -> Self {
        Self {
            population_size,
            generations,
        }
    }

    /// Quick preset: 20 candidates over 10 generations.
    pub fn fast() -> Self {
        Self::new(20, 10)
    }

    /// Thorough preset: 50 candidates over 100 generations.
    pub fn thorough() -> Self {
        Self::new(50, 100)
    }
}

/// Cooperative cancellation flag, checked at generation boundaries.
///
/// Clone the token, hand one copy to the search, keep the other to
/// request a stop from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates an unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// The result of one search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Best candidate observed; empty when no candidate ever scored
    /// above `-inf` ("no usable schedule found").
    pub best: Candidate,
    /// The best candidate's fitness score.
    pub score: f64,
    /// Generations evaluated before termination.
    pub generations_run: usize,
}

/// One genetic search run over a problem instance.
///
/// Owns its population and random stream exclusively; nothing is shared
/// across runs. The instance is validated in [`GeneticSearch::new`]
/// before any randomness is consumed.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use timetable_ga::ga::{GeneticSearch, SearchParams};
/// use timetable_ga::models::{ProblemInstance, Room, Teacher};
///
/// let instance = ProblemInstance::new(vec!["Monday".into()], 9, 12)
///     .with_teacher(
///         Teacher::new("Ahmed", "Math")
///             .with_sessions(2)
///             .with_availability("Monday", vec![9, 10, 11]),
///     )
///     .with_room(Room::new("R1"));
///
/// let rng = SmallRng::seed_from_u64(42);
/// let search = GeneticSearch::new(instance, SearchParams::fast(), rng).unwrap();
/// let outcome = search.run();
/// assert!(!outcome.best.is_empty());
/// ```
pub struct GeneticSearch<R: Rng> {
    instance: ProblemInstance,
    params: SearchParams,
    population: Vec<Candidate>,
    best: Option<Candidate>,
    best_score: f64,
    generation: usize,
    rng: R,
    cancel: CancelToken,
}

impl<R: Rng> GeneticSearch<R> {
    /// Validates the instance and materializes generation zero.
    ///
    /// Returns all detected problems at once; nothing random happens on
    /// the error path.
    pub fn new(
        instance: ProblemInstance,
        params: SearchParams,
        mut rng: R,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = match validate_instance(&instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if params.population_size == 0 || params.generations == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSearchParams,
                format!(
                    "empty search: population {} over {} generations",
                    params.population_size, params.generations
                ),
            ));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let population = (0..params.population_size)
            .map(|_| generate_candidate(&instance, &mut rng))
            .collect();

        Ok(Self {
            instance,
            params,
            population,
            best: None,
            best_score: f64::NEG_INFINITY,
            generation: 0,
            rng,
            cancel: CancelToken::new(),
        })
    }

    /// Attaches a cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Generations evaluated so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best score observed so far (`-inf` before the first evaluation).
    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    /// Best candidate observed so far.
    pub fn best(&self) -> Option<&Candidate> {
        self.best.as_ref()
    }

    /// Advances the search by exactly one generation.
    ///
    /// Evaluates unscored candidates, ranks the population, updates the
    /// running best, and breeds the next generation. Returns `true` when
    /// the search has converged (best ≥ target score) and further steps
    /// would be pointless.
    pub fn step(&mut self) -> bool {
        let evaluator = Evaluator::new(&self.instance);
        for candidate in &mut self.population {
            if candidate.cached_score().is_none() {
                let score = evaluator.score(candidate);
                candidate.set_score(score);
            }
        }

        self.population
            .sort_by(|a, b| cached(b).partial_cmp(&cached(a)).unwrap_or(CmpOrdering::Equal));

        let top = cached(&self.population[0]);
        if top > self.best_score {
            self.best_score = top;
            self.best = Some(self.population[0].clone());
            debug!("generation {}: new best score {:.2}", self.generation, top);
        }

        self.generation += 1;

        if self.best_score >= TARGET_SCORE {
            info!(
                "target score reached after {} generation(s): {:.2}",
                self.generation, self.best_score
            );
            return true;
        }

        self.breed();
        false
    }

    /// Runs the search to completion.
    pub fn run(self) -> SearchOutcome {
        self.run_with_progress(|_| {})
    }

    /// Runs the search, reporting percent progress at fixed generation
    /// intervals. The callback is an observation hook, not a control
    /// input.
    pub fn run_with_progress(mut self, mut on_progress: impl FnMut(u32)) -> SearchOutcome {
        info!(
            "starting search: {} candidates over {} generations",
            self.params.population_size, self.params.generations
        );

        while self.generation < self.params.generations {
            if self.cancel.is_cancelled() {
                info!("search cancelled at generation {}", self.generation);
                break;
            }

            let gen = self.generation;
            if self.step() {
                break;
            }
            if gen % PROGRESS_INTERVAL == 0 {
                on_progress((gen * 100 / self.params.generations) as u32);
            }
        }

        SearchOutcome {
            score: self.best_score,
            best: self.best.unwrap_or_default(),
            generations_run: self.generation,
        }
    }

    /// Builds the next generation: keep the top half unmodified, pad to
    /// 70% by resampling uniformly from the whole previous population,
    /// then fill with selected, recombined, and mutated offspring.
    fn breed(&mut self) {
        let pop_size = self.params.population_size;
        let survivors = (pop_size as f64 * SURVIVOR_FRACTION) as usize;
        let resample_target = (pop_size as f64 * RESAMPLE_FRACTION).ceil() as usize;

        let mut next: Vec<Candidate> =
            self.population[..survivors.min(self.population.len())].to_vec();

        while next.len() < resample_target {
            let pick = self.rng.random_range(0..self.population.len());
            next.push(self.population[pick].clone());
        }

        while next.len() < pop_size {
            let child = {
                let parent1 = select_parent(&self.population, &mut self.rng);
                let parent2 = select_parent(&self.population, &mut self.rng);
                crossover(parent1, parent2, &mut self.rng)
            };
            next.push(mutate(child, &self.instance, &mut self.rng));
        }

        self.population = next;
    }
}

fn cached(candidate: &Candidate) -> f64 {
    candidate.cached_score().unwrap_or(f64::NEG_INFINITY)
}
