use crate::{
    config::TrainingConfig,
    dataset::SampleSet,
    error::Result,
    metrics::Precision,
    params::ModelParams,
    training::{GradientTrace, Outcome, Trainer},
};

/// A univariate linear model estimating price from mileage.
///
/// A fresh model has a zero slope and intercept and estimates 0 for every
/// mileage. Training replaces both at once with the denormalized result.
#[derive(Debug, Clone, Default)]
pub struct LinearModel {
    params: ModelParams,
    trace: GradientTrace,
}

impl LinearModel {
    /// Returns an untrained `LinearModel`.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn trained(params: ModelParams, trace: GradientTrace) -> Self {
        Self { params, trace }
    }

    /// Estimates the price of a car with the given mileage.
    #[inline]
    pub fn estimate(&self, mileage: f64) -> f64 {
        self.params.apply(mileage)
    }

    #[inline]
    pub fn params(&self) -> ModelParams {
        self.params
    }

    /// The normalized parameters after each update of the last training run.
    /// Empty for an untrained model.
    #[inline]
    pub fn trace(&self) -> &GradientTrace {
        &self.trace
    }

    /// Trains the model on `samples` with gradient descent.
    ///
    /// On error the model is left untouched.
    ///
    /// # Errors
    /// `InvalidInput` if `config` or `samples` violate a precondition.
    pub fn train(&mut self, samples: &SampleSet, config: TrainingConfig) -> Result<Outcome> {
        let fit = Trainer::new(config)?.fit(samples)?;
        let outcome = fit.outcome();
        *self = fit.into_model();
        Ok(outcome)
    }

    /// R² and mean absolute error of the model over `samples`.
    pub fn precision(&self, samples: &SampleSet) -> Precision {
        Precision::measure(|mileage| self.estimate(mileage), samples)
    }
}
