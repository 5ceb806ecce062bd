use circlemap_layout::RegionGraph;

/// A parsed dataset: the name of the statistic and the regions it describes.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub title: String,
    pub graph: RegionGraph,
}

impl Dataset {
    pub fn region_count(&self) -> usize {
        self.graph.len()
    }

    pub fn into_parts(self) -> (String, RegionGraph) {
        (self.title, self.graph)
    }
}
