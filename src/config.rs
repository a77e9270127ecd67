use std::{fs, io, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
pub const DEFAULT_CONVERGENCE_EPSILON: f64 = 0.001;

/// Hyperparameters of a gradient descent training run.
///
/// Every field has a documented default, so a JSON file only needs to name
/// the values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    learning_rate: f64,
    max_iterations: NonZeroUsize,
    convergence_epsilon: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            max_iterations: NonZeroUsize::new(DEFAULT_MAX_ITERATIONS)
                .unwrap_or(NonZeroUsize::MIN),
            convergence_epsilon: DEFAULT_CONVERGENCE_EPSILON,
        }
    }
}

impl TrainingConfig {
    /// Creates a new training configuration.
    ///
    /// # Args
    /// * `learning_rate` - Step length of each gradient descent update.
    /// * `max_iterations` - Upper bound on the number of updates.
    /// * `convergence_epsilon` - Gradient magnitude under which training stops.
    pub fn new(learning_rate: f64, max_iterations: NonZeroUsize, convergence_epsilon: f64) -> Self {
        Self {
            learning_rate,
            max_iterations,
            convergence_epsilon,
        }
    }

    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json).map_err(io::Error::from)
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: NonZeroUsize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_epsilon(mut self, convergence_epsilon: f64) -> Self {
        self.convergence_epsilon = convergence_epsilon;
        self
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    #[inline]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations.get()
    }

    #[inline]
    pub fn convergence_epsilon(&self) -> f64 {
        self.convergence_epsilon
    }

    /// Checks every field is inside its domain.
    ///
    /// # Errors
    /// `InvalidInput::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(InvalidInput::InvalidConfig {
                field: "learning_rate",
                reason: "must be finite and positive",
            });
        }

        if !(self.convergence_epsilon.is_finite() && self.convergence_epsilon > 0.0) {
            return Err(InvalidInput::InvalidConfig {
                field: "convergence_epsilon",
                reason: "must be finite and positive",
            });
        }

        Ok(())
    }
}
