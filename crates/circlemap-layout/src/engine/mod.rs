use crate::config::{ForceTablePolicy, LayoutConfig, UpdateMode};
use crate::error::{Error, Result};
use crate::graph::{Position, RegionGraph, RegionId};
use crate::observer::{ProgressObserver, TracingObserver};
use nalgebra as na;

mod convergence;
mod force_table;

pub use convergence::{ConvergenceController, Termination};
pub use force_table::ForceTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxOutcome {
    /// Completed iterations. At least 1 for a non-empty graph.
    pub iterations: usize,
    pub termination: Termination,
    /// Summed displacement of the last iteration (`0.0` when no iteration ran).
    pub final_epsilon: f64,
}

impl RelaxOutcome {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Scales positions by `position_scale` and normalizes radii so that the smallest one equals
/// `min_radius_target`, keeping the ratios between radii.
pub fn preprocess(graph: &mut RegionGraph, config: &LayoutConfig) {
    let mut min_radius = f64::INFINITY;
    for r in &mut graph.regions {
        r.position.x *= config.position_scale;
        r.position.y *= config.position_scale;
        min_radius = min_radius.min(r.radius());
    }
    if !min_radius.is_finite() {
        return;
    }
    for r in &mut graph.regions {
        r.set_radius(config.min_radius_target * r.radius() / min_radius);
    }
}

/// Force-relaxation engine. Holds only the validated configuration; all per-run state lives in
/// a [`Relaxation`].
#[derive(Debug, Clone)]
pub struct Engine {
    config: LayoutConfig,
}

impl Engine {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Snapshots the current positions, runs the preprocessing pass and returns a relaxation
    /// that can be stepped one iteration at a time.
    pub fn start<'g>(&self, graph: &'g mut RegionGraph) -> Result<Relaxation<'g>> {
        graph.validate()?;
        Ok(Relaxation::new(self.config.clone(), graph))
    }

    pub fn run(&self, graph: &mut RegionGraph) -> Result<RelaxOutcome> {
        self.run_with_observer(graph, &mut TracingObserver)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(regions = graph.len()))]
    pub fn run_with_observer<O>(
        &self,
        graph: &mut RegionGraph,
        observer: &mut O,
    ) -> Result<RelaxOutcome>
    where
        O: ProgressObserver + ?Sized,
    {
        self.start(graph)?.run(observer)
    }
}

/// One in-progress relaxation over a borrowed graph.
pub struct Relaxation<'g> {
    config: LayoutConfig,
    graph: &'g mut RegionGraph,
    forces: ForceTable,
    snapshot: Vec<Position>,
    pass_start: Vec<Position>,
    controller: ConvergenceController,
    termination: Option<Termination>,
}

impl<'g> Relaxation<'g> {
    fn new(config: LayoutConfig, graph: &'g mut RegionGraph) -> Self {
        // The snapshot predates preprocessing, so the first epsilon includes the scaling move.
        let snapshot = graph.positions();
        let forces = ForceTable::new(graph.len());
        let controller =
            ConvergenceController::new(config.convergence_threshold, config.max_iterations);

        preprocess(graph, &config);
        tracing::debug!(
            regions = graph.len(),
            adjacencies = graph.adjacency_count(),
            update_mode = ?config.update_mode,
            force_table = ?config.force_table,
            "relaxation prepared"
        );

        let termination = graph.is_empty().then_some(Termination::Converged);
        Self {
            config,
            graph,
            forces,
            snapshot,
            pass_start: Vec::new(),
            controller,
            termination,
        }
    }

    pub fn graph(&self) -> &RegionGraph {
        &*self.graph
    }

    pub fn forces(&self) -> &ForceTable {
        &self.forces
    }

    pub fn iterations(&self) -> usize {
        self.controller.iterations()
    }

    pub fn last_epsilon(&self) -> Option<f64> {
        (self.controller.iterations() > 0).then(|| self.controller.last_epsilon())
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Runs one iteration: force pass, displacement pass, convergence measurement.
    ///
    /// Returns `Some` once the loop has to stop; further calls are no-ops.
    pub fn step(&mut self) -> Result<Option<Termination>> {
        if self.termination.is_some() {
            return Ok(self.termination);
        }
        let iteration = self.controller.iterations() + 1;

        if self.config.force_table == ForceTablePolicy::ResetEachIteration {
            self.forces.reset();
        }
        compute_forces(&*self.graph, &mut self.forces);

        let step_factor = self.config.step_factor;
        match self.config.update_mode {
            UpdateMode::Sequential => {
                displace_sequential(&mut *self.graph, &self.forces, step_factor, iteration)?
            }
            UpdateMode::Simultaneous => displace_simultaneous(
                &mut *self.graph,
                &self.forces,
                step_factor,
                iteration,
                &mut self.pass_start,
            )?,
        }

        let epsilon = self.measure_displacement();
        if !epsilon.is_finite() {
            return Err(Error::Diverged { iteration });
        }
        self.termination = self.controller.record(epsilon);
        Ok(self.termination)
    }

    /// Steps until the loop stops, reporting progress to `observer`.
    pub fn run<O>(mut self, observer: &mut O) -> Result<RelaxOutcome>
    where
        O: ProgressObserver + ?Sized,
    {
        let interval = self.config.progress_interval;
        let termination = loop {
            let stop = self.step()?;
            let iteration = self.controller.iterations();
            if interval > 0 && iteration > 0 && iteration % interval == 0 {
                observer.on_progress(iteration, self.controller.last_epsilon());
            }
            if let Some(t) = stop {
                break t;
            }
        };

        let outcome = RelaxOutcome {
            iterations: self.controller.iterations(),
            termination,
            final_epsilon: self.last_epsilon().unwrap_or(0.0),
        };
        tracing::debug!(
            iterations = outcome.iterations,
            termination = ?outcome.termination,
            epsilon = outcome.final_epsilon,
            "relaxation finished"
        );
        Ok(outcome)
    }

    fn measure_displacement(&mut self) -> f64 {
        let mut epsilon = 0.0;
        for (r, old) in self.graph.regions.iter().zip(self.snapshot.iter_mut()) {
            epsilon += na::distance(&r.position, old);
            *old = r.position;
        }
        epsilon
    }
}

fn compute_forces(graph: &RegionGraph, forces: &mut ForceTable) {
    for (i, a) in graph.regions.iter().enumerate() {
        for (j, b) in graph.regions.iter().enumerate() {
            if i == j {
                continue;
            }
            let gap = na::distance(&a.position, &b.position) - (a.radius() + b.radius());
            // Non-overlapping, non-adjacent pairs keep whatever the table already holds.
            if gap < 0.0 || a.is_adjacent_to(RegionId(j)) {
                forces.set(i, j, gap);
            }
        }
    }
}

fn displace_sequential(
    graph: &mut RegionGraph,
    forces: &ForceTable,
    step_factor: f64,
    iteration: usize,
) -> Result<()> {
    let n = graph.regions.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let current = graph.regions[i].position;
            let other = graph.regions[j].position;
            let d = na::distance(&current, &other);
            if !(d > 0.0 && d.is_finite()) {
                return Err(degenerate(graph, i, j, iteration));
            }
            let k = forces.get(i, j) * step_factor / d;
            graph.regions[i].position = current + (other - current) * k;
        }
    }
    Ok(())
}

fn displace_simultaneous(
    graph: &mut RegionGraph,
    forces: &ForceTable,
    step_factor: f64,
    iteration: usize,
    pass_start: &mut Vec<Position>,
) -> Result<()> {
    pass_start.clear();
    pass_start.extend(graph.regions.iter().map(|r| r.position));

    let n = pass_start.len();
    for i in 0..n {
        let current = pass_start[i];
        let mut moved = current;
        for (j, &other) in pass_start.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = na::distance(&current, &other);
            if !(d > 0.0 && d.is_finite()) {
                return Err(degenerate(graph, i, j, iteration));
            }
            let k = forces.get(i, j) * step_factor / d;
            moved += (other - current) * k;
        }
        graph.regions[i].position = moved;
    }
    Ok(())
}

fn degenerate(graph: &RegionGraph, i: usize, j: usize, iteration: usize) -> Error {
    Error::DegenerateGeometry {
        first: graph.regions[i].name.clone(),
        second: graph.regions[j].name.clone(),
        iteration,
    }
}
