//! Search budgets and cancellation
//!
//! The combination search can branch explosively on rich dictionaries, so
//! every search runs against a [`BudgetMeter`]. When the meter trips the
//! search stops and hands back whatever it has recorded so far.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// How many steps pass between clock reads
const CLOCK_INTERVAL: u64 = 1024;

/// Wall-clock limit of [`SearchBudget::bounded`]
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Solution cap of [`SearchBudget::bounded`]
pub const DEFAULT_MAX_SOLUTIONS: usize = 100_000;

/// Shared flag used to stop a running search from another thread
///
/// # Examples
/// ```
/// use letterboxed_solver::solver::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that every search holding this token stop
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Limits applied to one solve
///
/// All limits are optional. `Default` is unlimited; solvers built from
/// [`SolverConfig::default`](super::SolverConfig) use [`SearchBudget::bounded`].
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    /// Maximum number of stack pops across both searches
    pub max_steps: Option<u64>,
    /// Wall-clock limit measured from when the meter starts
    pub time_limit: Option<Duration>,
    /// Stop the chain search after this many solutions
    pub max_solutions: Option<usize>,
    pub cancel: Option<CancelToken>,
}

impl SearchBudget {
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// The budget front ends run with unless told otherwise
    ///
    /// Caps both the wall clock and the number of recorded solutions, so a
    /// large dictionary yields a partial result instead of exhausting memory.
    ///
    /// # Examples
    /// ```
    /// use letterboxed_solver::solver::{DEFAULT_MAX_SOLUTIONS, DEFAULT_TIME_LIMIT, SearchBudget};
    ///
    /// let budget = SearchBudget::bounded();
    /// assert_eq!(budget.time_limit, Some(DEFAULT_TIME_LIMIT));
    /// assert_eq!(budget.max_solutions, Some(DEFAULT_MAX_SOLUTIONS));
    /// ```
    #[must_use]
    pub fn bounded() -> Self {
        Self::unlimited()
            .with_time_limit(DEFAULT_TIME_LIMIT)
            .with_max_solutions(DEFAULT_MAX_SOLUTIONS)
    }

    #[must_use]
    pub fn with_max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_max_solutions(mut self, count: usize) -> Self {
        self.max_solutions = Some(count);
        self
    }

    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Start metering a search against this budget
    #[must_use]
    pub fn start(&self) -> BudgetMeter<'_> {
        BudgetMeter {
            budget: self,
            deadline: self.time_limit.map(|limit| Instant::now() + limit),
            steps: 0,
        }
    }
}

/// Why a search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The frontier emptied; the result is complete
    Exhausted,
    Cancelled,
    StepLimit,
    TimedOut,
    SolutionLimit,
}

impl SearchStatus {
    /// Whether the search explored its whole frontier
    #[inline]
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Exhausted => "complete",
            Self::Cancelled => "cancelled",
            Self::StepLimit => "step limit reached",
            Self::TimedOut => "time limit reached",
            Self::SolutionLimit => "solution limit reached",
        };
        f.write_str(text)
    }
}

/// Items recorded by a search plus how it ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    pub items: Vec<T>,
    pub status: SearchStatus,
    /// Stack pops performed
    pub steps: u64,
}

/// Running tally of a budget during a search
#[derive(Debug)]
pub struct BudgetMeter<'a> {
    budget: &'a SearchBudget,
    deadline: Option<Instant>,
    steps: u64,
}

impl BudgetMeter<'_> {
    /// Record one step; returns the stop reason if the budget is spent
    #[inline]
    pub fn tick(&mut self) -> Option<SearchStatus> {
        if self
            .budget
            .cancel
            .as_ref()
            .is_some_and(CancelToken::is_cancelled)
        {
            return Some(SearchStatus::Cancelled);
        }
        if self.budget.max_steps.is_some_and(|max| self.steps >= max) {
            return Some(SearchStatus::StepLimit);
        }
        if let Some(deadline) = self.deadline
            && self.steps % CLOCK_INTERVAL == 0
            && Instant::now() >= deadline
        {
            return Some(SearchStatus::TimedOut);
        }

        self.steps += 1;
        None
    }

    /// Whether `count` recorded solutions already fill the cap
    ///
    /// Checked before recording another solution, so a cap of zero records
    /// nothing.
    #[inline]
    #[must_use]
    pub fn solutions_reached(&self, count: usize) -> bool {
        self.budget.max_solutions.is_some_and(|max| count >= max)
    }

    /// Steps recorded so far
    #[inline]
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_never_trips() {
        let budget = SearchBudget::unlimited();
        let mut meter = budget.start();
        for _ in 0..10_000 {
            assert_eq!(meter.tick(), None);
        }
        assert_eq!(meter.steps(), 10_000);
        assert!(!meter.solutions_reached(usize::MAX));
    }

    #[test]
    fn step_limit_trips_after_max() {
        let budget = SearchBudget::unlimited().with_max_steps(3);
        let mut meter = budget.start();
        assert_eq!(meter.tick(), None);
        assert_eq!(meter.tick(), None);
        assert_eq!(meter.tick(), None);
        assert_eq!(meter.tick(), Some(SearchStatus::StepLimit));
        assert_eq!(meter.steps(), 3);
    }

    #[test]
    fn zero_time_limit_trips_immediately() {
        let budget = SearchBudget::unlimited().with_time_limit(Duration::ZERO);
        let mut meter = budget.start();
        assert_eq!(meter.tick(), Some(SearchStatus::TimedOut));
    }

    #[test]
    fn cancellation_is_observed() {
        let token = CancelToken::new();
        let budget = SearchBudget::unlimited().with_cancel_token(token.clone());
        let mut meter = budget.start();
        assert_eq!(meter.tick(), None);
        token.cancel();
        assert_eq!(meter.tick(), Some(SearchStatus::Cancelled));
    }

    #[test]
    fn cancel_from_another_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }

    #[test]
    fn solution_cap() {
        let budget = SearchBudget::unlimited().with_max_solutions(2);
        let meter = budget.start();
        assert!(!meter.solutions_reached(1));
        assert!(meter.solutions_reached(2));
    }

    #[test]
    fn bounded_budget_has_every_default_limit() {
        let budget = SearchBudget::bounded();
        assert_eq!(budget.time_limit, Some(DEFAULT_TIME_LIMIT));
        assert_eq!(budget.max_solutions, Some(DEFAULT_MAX_SOLUTIONS));
        assert_eq!(budget.max_steps, None);
        assert!(budget.cancel.is_none());

        let meter = budget.start();
        assert!(!meter.solutions_reached(DEFAULT_MAX_SOLUTIONS - 1));
        assert!(meter.solutions_reached(DEFAULT_MAX_SOLUTIONS));
    }

    #[test]
    fn zero_solution_cap_is_already_full() {
        let budget = SearchBudget::unlimited().with_max_solutions(0);
        assert!(budget.start().solutions_reached(0));
    }

    #[test]
    fn status_display_and_completeness() {
        assert!(SearchStatus::Exhausted.is_complete());
        assert!(!SearchStatus::TimedOut.is_complete());
        assert_eq!(SearchStatus::Cancelled.to_string(), "cancelled");
    }
}
