/// Dense `n x n` table of signed pairwise forces, row-major.
///
/// Entry `(i, j)` is the force region `j` exerts on region `i`: negative pushes `i` away from
/// `j` (the circles overlap), positive pulls `i` towards `j` (only for declared neighbors).
#[derive(Debug, Clone, PartialEq)]
pub struct ForceTable {
    size: usize,
    values: Vec<f64>,
}

impl ForceTable {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size.saturating_mul(size)],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[self.idx(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.idx(i, j);
        self.values[idx] = value;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.size;
        &self.values[start..start + self.size]
    }

    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.size && j < self.size);
        i * self.size + j
    }
}
