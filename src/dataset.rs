use crate::error::{InvalidInput, Result};

/// A single observation: a car's mileage and the price it sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub mileage: i64,
    pub price: i64,
}

/// The raw samples a model is trained on, paired by index.
///
/// Construction guarantees both series are non-empty and of equal length, so
/// everything downstream can index them freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    mileages: Vec<i64>,
    prices: Vec<i64>,
}

impl SampleSet {
    /// Creates a new `SampleSet` from two paired series.
    ///
    /// # Arguments
    /// * `mileages` - The independent variable, one entry per sample.
    /// * `prices` - The dependent variable, one entry per sample.
    ///
    /// # Errors
    /// `InvalidInput::EmptySamples` if there are no samples and
    /// `InvalidInput::LengthMismatch` if the series differ in length.
    pub fn new(mileages: Vec<i64>, prices: Vec<i64>) -> Result<Self> {
        if mileages.len() != prices.len() {
            return Err(InvalidInput::LengthMismatch {
                mileages: mileages.len(),
                prices: prices.len(),
            });
        }

        if mileages.is_empty() {
            return Err(InvalidInput::EmptySamples);
        }

        Ok(Self { mileages, prices })
    }

    /// Creates a new `SampleSet` from `(mileage, price)` pairs.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self> {
        let (mileages, prices) = pairs.iter().copied().unzip();
        Self::new(mileages, prices)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mileages.len()
    }

    /// Always `false`, kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mileages.is_empty()
    }

    #[inline]
    pub fn mileages(&self) -> &[i64] {
        &self.mileages
    }

    #[inline]
    pub fn prices(&self) -> &[i64] {
        &self.prices
    }

    /// Iterates the samples in their original order.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.mileages
            .iter()
            .zip(&self.prices)
            .map(|(&mileage, &price)| Sample { mileage, price })
    }
}

/// Samples mapped to zero mean and unit variance, one series per variable.
///
/// Only ever built by a `Normalizer`, and only lives for one training run.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSamples {
    mileages: Vec<f64>,
    prices: Vec<f64>,
}

impl NormalizedSamples {
    pub(crate) fn new(mileages: Vec<f64>, prices: Vec<f64>) -> Self {
        debug_assert_eq!(mileages.len(), prices.len());
        Self { mileages, prices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mileages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mileages.is_empty()
    }

    #[inline]
    pub fn mileages(&self) -> &[f64] {
        &self.mileages
    }

    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Iterates the `(x, y)` pairs in normalized space.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mileages.iter().copied().zip(self.prices.iter().copied())
    }
}
