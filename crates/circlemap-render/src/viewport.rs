use circlemap_layout::RegionGraph;
use serde::Serialize;

/// Square plotting window enclosing every circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Bounding box of all circles, with the shorter side extended from its minimum so that
    /// both spans equal the longer one. `None` for an empty graph.
    pub fn square_around(graph: &RegionGraph) -> Option<Self> {
        if graph.is_empty() {
            return None;
        }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for r in graph.regions() {
            x_min = x_min.min(r.x() - r.radius());
            x_max = x_max.max(r.x() + r.radius());
            y_min = y_min.min(r.y() - r.radius());
            y_max = y_max.max(r.y() + r.radius());
        }
        let side = (x_max - x_min).max(y_max - y_min);
        Some(Self {
            x_min,
            x_max: x_min + side,
            y_min,
            y_max: y_min + side,
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
