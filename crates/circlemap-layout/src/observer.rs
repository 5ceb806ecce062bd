//! Progress reporting for long relaxation runs.

/// Receives periodic progress from a running relaxation.
///
/// The engine calls [`ProgressObserver::on_progress`] after every `progress_interval`-th
/// iteration, before the stop test of that iteration.
pub trait ProgressObserver {
    fn on_progress(&mut self, iteration: usize, epsilon: f64);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_progress(&mut self, iteration: usize, epsilon: f64) {
        self(iteration, epsilon)
    }
}

/// Emits a `tracing` event per report.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_progress(&mut self, iteration: usize, epsilon: f64) {
        tracing::info!(iteration, epsilon, "relaxation progress");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_progress(&mut self, _iteration: usize, _epsilon: f64) {}
}
