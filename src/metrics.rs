use std::fmt::{self, Display};

use crate::dataset::SampleSet;

/// Goodness of fit of a model over a sample set, in original units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision {
    /// Coefficient of determination, `1 - SS_res / SS_tot`. NaN when every
    /// price is the same.
    pub r2: f64,
    /// Mean absolute error between observed and estimated prices.
    pub mae: f64,
}

impl Precision {
    /// Measures `estimate` against every sample.
    pub fn measure<F>(estimate: F, samples: &SampleSet) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let n = samples.len() as f64;
        let mean_price = samples.prices().iter().map(|&p| p as f64).sum::<f64>() / n;

        let (ss_res, ss_tot, abs_err) =
            samples
                .iter()
                .fold((0.0, 0.0, 0.0), |(ss_res, ss_tot, abs_err), s| {
                    let price = s.price as f64;
                    let residual = price - estimate(s.mileage as f64);
                    (
                        ss_res + residual.powi(2),
                        ss_tot + (price - mean_price).powi(2),
                        abs_err + residual.abs(),
                    )
                });

        let r2 = if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else {
            f64::NAN
        };

        Self { r2, mae: abs_err / n }
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r2_score: {:.6} | mae: {:.2}", self.r2, self.mae)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_estimate() {
        let samples = SampleSet::from_pairs(&[(1, 10), (2, 20), (3, 30)]).unwrap();
        let precision = Precision::measure(|x| 10.0 * x, &samples);

        assert_eq!(precision.r2, 1.0);
        assert_eq!(precision.mae, 0.0);
    }

    #[test]
    fn test_mean_estimate_has_zero_r2() {
        let samples = SampleSet::from_pairs(&[(1, 10), (2, 20), (3, 30)]).unwrap();
        let precision = Precision::measure(|_| 20.0, &samples);

        assert!(precision.r2.abs() < 1e-12);
        assert!((precision.mae - 20.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_prices_give_nan_r2() {
        let samples = SampleSet::from_pairs(&[(1, 5), (2, 5)]).unwrap();
        assert!(Precision::measure(|_| 5.0, &samples).r2.is_nan());
    }
}
