use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How positions are updated inside one displacement pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateMode {
    /// Gauss-Seidel: later pairs see positions already moved earlier in the same pass.
    /// Results depend on region order.
    #[default]
    Sequential,
    /// Jacobi: every displacement is computed from the positions at the start of the pass.
    Simultaneous,
}

impl FromStr for UpdateMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "gauss-seidel" => Ok(Self::Sequential),
            "simultaneous" | "jacobi" => Ok(Self::Simultaneous),
            _ => Err(()),
        }
    }
}

/// What happens to force table entries that the force pass does not overwrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForceTablePolicy {
    /// The table is zeroed once before the loop. A pair that stops overlapping and is not
    /// adjacent keeps its last repulsive value.
    #[default]
    CarryForward,
    /// The table is zeroed before every force pass.
    ResetEachIteration,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Scales how far a force moves a region per iteration.
    pub step_factor: f64,
    /// The run converges once the summed displacement of an iteration is at or below this.
    pub convergence_threshold: f64,
    /// Hard iteration cap. Opposing forces can keep a region oscillating forever.
    pub max_iterations: usize,
    /// Applied to every position once, before the first iteration.
    pub position_scale: f64,
    /// Radius of the smallest region after normalization.
    pub min_radius_target: f64,
    /// Progress is reported every this many iterations; `0` disables reporting.
    pub progress_interval: usize,
    pub update_mode: UpdateMode,
    pub force_table: ForceTablePolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            step_factor: 0.005,
            convergence_threshold: 0.0005,
            max_iterations: 100_000,
            position_scale: 10.0,
            min_radius_target: 3.0,
            progress_interval: 10_000,
            update_mode: UpdateMode::Sequential,
            force_table: ForceTablePolicy::CarryForward,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_factor(mut self, step_factor: f64) -> Self {
        self.step_factor = step_factor;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_position_scale(mut self, scale: f64) -> Self {
        self.position_scale = scale;
        self
    }

    pub fn with_min_radius_target(mut self, target: f64) -> Self {
        self.min_radius_target = target;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn with_update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    pub fn with_force_table(mut self, policy: ForceTablePolicy) -> Self {
        self.force_table = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(message: String) -> Result<()> {
            Err(Error::InvalidConfig { message })
        }

        if !(self.step_factor.is_finite() && self.step_factor > 0.0) {
            return invalid(format!(
                "stepFactor must be a positive number, got {}",
                self.step_factor
            ));
        }
        if !(self.convergence_threshold.is_finite() && self.convergence_threshold >= 0.0) {
            return invalid(format!(
                "convergenceThreshold must be a non-negative number, got {}",
                self.convergence_threshold
            ));
        }
        if self.max_iterations == 0 {
            return invalid("maxIterations must be at least 1".to_string());
        }
        if !(self.position_scale.is_finite() && self.position_scale > 0.0) {
            return invalid(format!(
                "positionScale must be a positive number, got {}",
                self.position_scale
            ));
        }
        if !(self.min_radius_target.is_finite() && self.min_radius_target > 0.0) {
            return invalid(format!(
                "minRadiusTarget must be a positive number, got {}",
                self.min_radius_target
            ));
        }
        Ok(())
    }
}
