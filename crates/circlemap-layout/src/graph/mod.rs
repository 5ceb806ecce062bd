use crate::error::{Error, Result};
use nalgebra as na;
use rustc_hash::{FxHashMap, FxHashSet};

/// Center of a region circle.
pub type Position = na::Point2<f64>;

/// Index of a region inside its [`RegionGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

impl RegionId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub position: Position,
    radius: f64,
    neighbors: FxHashSet<RegionId>,
}

impl Region {
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn is_adjacent_to(&self, other: RegionId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Neighbor ids in ascending order.
    pub fn neighbors(&self) -> Vec<RegionId> {
        let mut out: Vec<RegionId> = self.neighbors.iter().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius.is_finite() && radius > 0.0);
        self.radius = radius;
    }
}

/// Regions stored in a contiguous arena, with a symmetric adjacency relation expressed through
/// [`RegionId`] indices.
///
/// The order in which regions are added is the iteration order of the relaxation engine, which
/// makes it part of the layout result.
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    pub(crate) regions: Vec<Region>,
    name_to_idx: FxHashMap<String, usize>,
}

impl RegionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut name_to_idx = FxHashMap::default();
        name_to_idx.reserve(capacity);
        Self {
            regions: Vec::with_capacity(capacity),
            name_to_idx,
        }
    }

    pub fn add_region(
        &mut self,
        name: impl Into<String>,
        x: f64,
        y: f64,
        radius: f64,
    ) -> Result<RegionId> {
        let name = name.into();
        if self.name_to_idx.contains_key(&name) {
            return Err(Error::DuplicateRegion { name });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidRadius { name, radius });
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::InvalidPosition { name, x, y });
        }

        let idx = self.regions.len();
        self.name_to_idx.insert(name.clone(), idx);
        self.regions.push(Region {
            name,
            position: Position::new(x, y),
            radius,
            neighbors: FxHashSet::default(),
        });
        Ok(RegionId(idx))
    }

    /// Declares `a` and `b` as neighbors in both directions.
    ///
    /// Returns `false` if the pair was already adjacent.
    pub fn add_adjacency(&mut self, a: RegionId, b: RegionId) -> Result<bool> {
        self.check_id(a)?;
        self.check_id(b)?;
        if a == b {
            return Err(Error::SelfAdjacency {
                name: self.regions[a.0].name.clone(),
            });
        }
        let inserted = self.regions[a.0].neighbors.insert(b);
        self.regions[b.0].neighbors.insert(a);
        Ok(inserted)
    }

    pub fn index_of(&self, name: &str) -> Option<RegionId> {
        self.name_to_idx.get(name).copied().map(RegionId)
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    pub fn region_by_name(&self, name: &str) -> Option<&Region> {
        self.index_of(name).and_then(|id| self.region(id))
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn are_adjacent(&self, a: RegionId, b: RegionId) -> bool {
        self.region(a).is_some_and(|r| r.is_adjacent_to(b))
    }

    /// Number of undirected adjacency pairs.
    pub fn adjacency_count(&self) -> usize {
        self.regions.iter().map(Region::neighbor_count).sum::<usize>() / 2
    }

    pub fn positions(&self) -> Vec<Position> {
        self.regions.iter().map(|r| r.position).collect()
    }

    /// Re-checks the invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        for (idx, r) in self.regions.iter().enumerate() {
            if self.name_to_idx.get(&r.name) != Some(&idx) {
                return Err(Error::DuplicateRegion {
                    name: r.name.clone(),
                });
            }
            if !(r.radius.is_finite() && r.radius > 0.0) {
                return Err(Error::InvalidRadius {
                    name: r.name.clone(),
                    radius: r.radius,
                });
            }
            if !(r.position.x.is_finite() && r.position.y.is_finite()) {
                return Err(Error::InvalidPosition {
                    name: r.name.clone(),
                    x: r.position.x,
                    y: r.position.y,
                });
            }
            for &n in &r.neighbors {
                self.check_id(n)?;
                if n.0 == idx {
                    return Err(Error::SelfAdjacency {
                        name: r.name.clone(),
                    });
                }
                if !self.regions[n.0].neighbors.contains(&RegionId(idx)) {
                    return Err(Error::AsymmetricAdjacency {
                        first: r.name.clone(),
                        second: self.regions[n.0].name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_id(&self, id: RegionId) -> Result<()> {
        if id.0 < self.regions.len() {
            Ok(())
        } else {
            Err(Error::UnknownRegion {
                index: id.0,
                len: self.regions.len(),
            })
        }
    }
}
