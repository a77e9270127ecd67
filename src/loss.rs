use crate::{
    dataset::{NormalizedSamples, SampleSet},
    params::{ModelParams, NormalizedParams},
};

/// Partial derivatives of the loss with respect to each parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gradient {
    pub slope: f64,
    pub intercept: f64,
}

impl Gradient {
    /// Whether both components are strictly below `epsilon` in magnitude.
    #[inline]
    pub fn is_within(&self, epsilon: f64) -> bool {
        self.intercept.abs() < epsilon && self.slope.abs() < epsilon
    }
}

/// Sum of squared residuals loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ssr;

impl Ssr {
    /// Returns a new `Ssr`.
    pub fn new() -> Self {
        Self
    }

    /// `Σ (y - (intercept + slope * x))²` over the normalized samples.
    pub fn loss(&self, params: NormalizedParams, samples: &NormalizedSamples) -> f64 {
        samples
            .pairs()
            .map(|(x, y)| (y - params.apply(x)).powi(2))
            .sum()
    }

    /// The batch gradient of `loss` over every sample.
    ///
    /// # Returns
    /// `-2 Σ r` for the intercept and `-2 Σ r·x` for the slope, where `r` is
    /// each sample's residual.
    pub fn gradient(&self, params: NormalizedParams, samples: &NormalizedSamples) -> Gradient {
        let (sum_r, sum_rx) = samples
            .pairs()
            .fold((0.0, 0.0), |(sum_r, sum_rx), (x, y)| {
                let residual = y - params.apply(x);
                (sum_r + residual, sum_rx + residual * x)
            });

        Gradient {
            slope: -2.0 * sum_rx,
            intercept: -2.0 * sum_r,
        }
    }
}

/// Sum of squared residuals of a line in original units.
pub fn ssr(params: ModelParams, samples: &SampleSet) -> f64 {
    samples
        .iter()
        .map(|s| (s.price as f64 - params.apply(s.mileage as f64)).powi(2))
        .sum()
}
