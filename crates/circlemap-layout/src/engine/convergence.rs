/// Why a relaxation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The summed displacement of the last iteration fell to or below the threshold.
    Converged,
    /// The iteration cap was reached while the layout was still moving.
    IterationCapReached,
}

/// Tracks iterations and decides when the relaxation loop stops.
///
/// The loop continues while `epsilon > threshold && iterations < max_iterations`. Epsilon is
/// not monotone, so the cap is the only termination guarantee.
#[derive(Debug, Clone)]
pub struct ConvergenceController {
    threshold: f64,
    max_iterations: usize,
    iterations: usize,
    last_epsilon: f64,
}

impl ConvergenceController {
    pub fn new(threshold: f64, max_iterations: usize) -> Self {
        Self {
            threshold,
            max_iterations,
            iterations: 0,
            last_epsilon: f64::INFINITY,
        }
    }

    /// Records the displacement of one completed iteration.
    ///
    /// Returns `Some` once the loop must stop.
    pub fn record(&mut self, epsilon: f64) -> Option<Termination> {
        self.iterations += 1;
        self.last_epsilon = epsilon;
        if epsilon <= self.threshold {
            Some(Termination::Converged)
        } else if self.iterations >= self.max_iterations {
            Some(Termination::IterationCapReached)
        } else {
            None
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn last_epsilon(&self) -> f64 {
        self.last_epsilon
    }
}
