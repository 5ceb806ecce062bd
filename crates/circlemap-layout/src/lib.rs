#![forbid(unsafe_code)]

//! Headless force-relaxation layout for circle cartograms.
//!
//! Every region is a circle with an area-derived radius and a geographic hint position.
//! The engine pushes overlapping circles apart and pulls declared neighbors together until the
//! summed displacement of one iteration drops below a threshold, or an iteration cap is hit.
//!
//! ```no_run
//! use circlemap_layout::{LayoutConfig, RegionGraph, relax};
//!
//! let mut graph = RegionGraph::new();
//! let a = graph.add_region("A", 0.0, 0.0, 2.0)?;
//! let b = graph.add_region("B", 1.0, 0.0, 4.0)?;
//! graph.add_adjacency(a, b)?;
//!
//! let outcome = relax(&mut graph, &LayoutConfig::default())?;
//! println!("{} iterations", outcome.iterations);
//! # Ok::<(), circlemap_layout::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod observer;

pub use config::{ForceTablePolicy, LayoutConfig, UpdateMode};
pub use engine::{
    ConvergenceController, Engine, ForceTable, RelaxOutcome, Relaxation, Termination, preprocess,
};
pub use error::{Error, Result};
pub use graph::{Position, Region, RegionGraph, RegionId};
pub use observer::{NoopObserver, ProgressObserver, TracingObserver};

/// Relaxes `graph` in place with the default tracing observer.
///
/// Returns the outcome of the run; `outcome.iterations` is the number of completed iterations.
pub fn relax(graph: &mut RegionGraph, config: &LayoutConfig) -> Result<RelaxOutcome> {
    Engine::new(config.clone())?.run(graph)
}
