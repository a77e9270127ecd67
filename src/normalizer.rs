use crate::{
    dataset::{NormalizedSamples, SampleSet},
    error::{InvalidInput, Result},
    params::{ModelParams, NormalizedParams},
};

/// Mean and population standard deviation of a single series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    mean: f64,
    std_dev: f64,
}

impl Statistics {
    /// Computes the statistics of `values`.
    ///
    /// The standard deviation divides by `N`, not `N - 1`.
    ///
    /// # Arguments
    /// * `series` - The name of the series, used only in error messages.
    /// * `values` - The series itself.
    ///
    /// # Errors
    /// `InvalidInput::EmptySamples` if `values` is empty and
    /// `InvalidInput::ZeroVariance` if every value is the same.
    pub fn compute(series: &'static str, values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(InvalidInput::EmptySamples);
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        if std_dev <= 0.0 {
            return Err(InvalidInput::ZeroVariance { series });
        }

        Ok(Self { mean, std_dev })
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    #[inline]
    fn standardize(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }
}

/// Maps samples into normalized space and fitted parameters back out of it.
///
/// Built once per training run; the statistics it holds are never recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    mileage: Statistics,
    price: Statistics,
}

impl Normalizer {
    /// Creates a new `Normalizer` from the statistics of `samples`.
    ///
    /// # Errors
    /// `InvalidInput::ZeroVariance` if either series is constant.
    pub fn new(samples: &SampleSet) -> Result<Self> {
        let mileage = Statistics::compute("mileage", &as_f64(samples.mileages()))?;
        let price = Statistics::compute("price", &as_f64(samples.prices()))?;

        Ok(Self { mileage, price })
    }

    #[inline]
    pub fn mileage(&self) -> Statistics {
        self.mileage
    }

    #[inline]
    pub fn price(&self) -> Statistics {
        self.price
    }

    /// Standardizes each series with its own statistics, preserving order.
    pub fn normalize(&self, samples: &SampleSet) -> NormalizedSamples {
        let mileages = samples
            .mileages()
            .iter()
            .map(|&x| self.mileage.standardize(x as f64))
            .collect();

        let prices = samples
            .prices()
            .iter()
            .map(|&y| self.price.standardize(y as f64))
            .collect();

        NormalizedSamples::new(mileages, prices)
    }

    /// Maps a normalized slope into original units.
    pub fn denormalize_slope(&self, n_slope: f64) -> f64 {
        n_slope * (self.price.std_dev / self.mileage.std_dev)
    }

    /// Maps a normalized intercept into original units.
    ///
    /// `slope` must already be denormalized, see `denormalize_slope`.
    pub fn denormalize_intercept(&self, n_intercept: f64, slope: f64) -> f64 {
        n_intercept * self.price.std_dev + self.price.mean - slope * self.mileage.mean
    }

    /// Maps both parameters into original units, slope first.
    pub fn denormalize(&self, params: NormalizedParams) -> ModelParams {
        let slope = self.denormalize_slope(params.slope);
        let intercept = self.denormalize_intercept(params.intercept, slope);
        ModelParams { slope, intercept }
    }
}

fn as_f64(values: &[i64]) -> Vec<f64> {
    values.iter().map(|&v| v as f64).collect()
}
