use log::{debug, info, warn};

use super::{GradientTrace, Outcome, TrainingState};
use crate::{
    config::TrainingConfig,
    dataset::{NormalizedSamples, SampleSet},
    error::Result,
    loss::Ssr,
    model::LinearModel,
    normalizer::Normalizer,
    optimization::{GradientDescent, Optimizer},
    params::{ModelParams, NormalizedParams},
};

/// Fits a line to a `SampleSet` by batch gradient descent in normalized space.
pub struct Trainer<O: Optimizer = GradientDescent> {
    config: TrainingConfig,
    optimizer: O,
    loss_fn: Ssr,
    state: TrainingState,
}

impl Trainer<GradientDescent> {
    /// Returns a new `Trainer` using plain gradient descent with the configured
    /// learning rate.
    ///
    /// # Errors
    /// `InvalidInput::InvalidConfig` if `config` does not validate.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        let optimizer = GradientDescent::new(config.learning_rate());
        Self::with_optimizer(config, optimizer)
    }
}

impl<O: Optimizer> Trainer<O> {
    /// Returns a new `Trainer` stepping with `optimizer`.
    ///
    /// # Arguments
    /// * `config` - Iteration cap and convergence tolerance of every run.
    /// * `optimizer` - The update rule applied after each gradient evaluation.
    ///
    /// # Errors
    /// `InvalidInput::InvalidConfig` if `config` does not validate.
    pub fn with_optimizer(config: TrainingConfig, optimizer: O) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            optimizer,
            loss_fn: Ssr::new(),
            state: TrainingState::Initialized,
        })
    }

    #[inline]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// The phase the last `fit` call ended in.
    #[inline]
    pub fn state(&self) -> TrainingState {
        self.state
    }

    /// Trains on `samples`, starting from a zero slope and intercept.
    ///
    /// # Arguments
    /// * `samples` - The raw mileage/price pairs.
    ///
    /// # Returns
    /// The fitted parameters in both spaces, the trace of every update and
    /// how the run ended.
    ///
    /// # Errors
    /// `InvalidInput::ZeroVariance` if either series is constant. No update is
    /// performed in that case.
    pub fn fit(&mut self, samples: &SampleSet) -> Result<Fit> {
        self.state = TrainingState::Initialized;
        info!(
            samples = samples.len(),
            learning_rate = self.config.learning_rate(),
            max_iterations = self.config.max_iterations(),
            epsilon = self.config.convergence_epsilon();
            "training started"
        );

        self.state = TrainingState::Normalizing;
        let normalizer = match Normalizer::new(samples) {
            Ok(normalizer) => normalizer,
            Err(e) => {
                self.state = TrainingState::Initialized;
                return Err(e);
            }
        };
        let normalized = normalizer.normalize(samples);

        self.state = TrainingState::Iterating;
        let (normalized_params, trace, outcome) = self.descend(&normalized);
        self.state = outcome.state();

        let params = normalizer.denormalize(normalized_params);
        info!(
            iterations = outcome.iterations(),
            slope = params.slope,
            intercept = params.intercept;
            "training {}", self.state
        );

        Ok(Fit {
            params,
            normalized_params,
            normalizer,
            trace,
            outcome,
        })
    }

    fn descend(
        &mut self,
        samples: &NormalizedSamples,
    ) -> (NormalizedParams, GradientTrace, Outcome) {
        let max_iterations = self.config.max_iterations();
        let epsilon = self.config.convergence_epsilon();

        let mut params = NormalizedParams::default();
        let mut trace = GradientTrace::new();

        for iteration in 0..max_iterations {
            let grad = self.loss_fn.gradient(params, samples);

            if grad.is_within(epsilon) {
                let outcome = Outcome::Converged {
                    iterations: iteration,
                };
                return (params, trace, outcome);
            }

            self.optimizer.update_params(&mut params, grad);
            trace.push(params);

            debug!(
                iteration = iteration,
                slope = params.slope,
                intercept = params.intercept,
                grad_slope = grad.slope,
                grad_intercept = grad.intercept;
                "parameters updated"
            );
        }

        warn!("no convergence after {max_iterations} iterations, keeping last parameters");
        let outcome = Outcome::IterationCapReached {
            iterations: max_iterations,
        };

        (params, trace, outcome)
    }
}

/// The result of a successful `Trainer::fit` call.
#[derive(Debug, Clone)]
pub struct Fit {
    params: ModelParams,
    normalized_params: NormalizedParams,
    normalizer: Normalizer,
    trace: GradientTrace,
    outcome: Outcome,
}

impl Fit {
    /// The fitted line in original units.
    #[inline]
    pub fn params(&self) -> ModelParams {
        self.params
    }

    /// The fitted line in the normalized space training happened in.
    #[inline]
    pub fn normalized_params(&self) -> NormalizedParams {
        self.normalized_params
    }

    /// The normalizer built from the training samples.
    #[inline]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    #[inline]
    pub fn trace(&self) -> &GradientTrace {
        &self.trace
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Turns the fit into a model ready to answer estimates.
    pub fn into_model(self) -> LinearModel {
        LinearModel::trained(self.params, self.trace)
    }
}
