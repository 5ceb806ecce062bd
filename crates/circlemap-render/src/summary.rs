use crate::Result;
use crate::viewport::Viewport;
use circlemap_layout::{RegionGraph, RelaxOutcome};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub neighbors: Vec<String>,
}

/// Machine-readable form of a finished layout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub title: String,
    pub iterations: usize,
    pub converged: bool,
    pub final_epsilon: f64,
    pub viewport: Option<Viewport>,
    pub regions: Vec<RegionSummary>,
}

impl LayoutSummary {
    pub fn new(graph: &RegionGraph, title: &str, outcome: &RelaxOutcome) -> Self {
        let regions = graph
            .regions()
            .iter()
            .map(|r| RegionSummary {
                name: r.name.clone(),
                x: r.x(),
                y: r.y(),
                radius: r.radius(),
                neighbors: r
                    .neighbors()
                    .into_iter()
                    .filter_map(|id| graph.region(id).map(|n| n.name.clone()))
                    .collect(),
            })
            .collect();

        Self {
            title: title.to_string(),
            iterations: outcome.iterations,
            converged: outcome.converged(),
            final_epsilon: outcome.final_epsilon,
            viewport: Viewport::square_around(graph),
            regions,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        })
    }
}
