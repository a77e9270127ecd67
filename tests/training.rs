use std::num::NonZeroUsize;

use linear_regression::{
    loss::Ssr, InvalidInput, LinearModel, ModelParams, NormalizedParams, Outcome, SampleSet,
    Trainer, TrainingConfig, TrainingState,
};

const CARS: [(i64, i64); 24] = [
    (240000, 3650),
    (139800, 3800),
    (150500, 4400),
    (185530, 4450),
    (176000, 5250),
    (114800, 5350),
    (166800, 5800),
    (89000, 5990),
    (144500, 5999),
    (84000, 6200),
    (82029, 6390),
    (63060, 6390),
    (74000, 6600),
    (97500, 6800),
    (67000, 6800),
    (76025, 6900),
    (48235, 6990),
    (93000, 7490),
    (60949, 7555),
    (65674, 7990),
    (54000, 7990),
    (68500, 7990),
    (22899, 7990),
    (61789, 8290),
];

fn cars() -> SampleSet {
    SampleSet::from_pairs(&CARS).unwrap()
}

fn line() -> SampleSet {
    SampleSet::from_pairs(&[(1, 10), (2, 20), (3, 30)]).unwrap()
}

fn tight_config() -> TrainingConfig {
    TrainingConfig::default()
        .with_convergence_epsilon(1e-10)
        .with_max_iterations(NonZeroUsize::new(10_000).unwrap())
}

/// Ordinary least squares, straight from the normal equations.
fn least_squares(samples: &SampleSet) -> ModelParams {
    let n = samples.len() as f64;
    let mean_x = samples.mileages().iter().map(|&x| x as f64).sum::<f64>() / n;
    let mean_y = samples.prices().iter().map(|&y| y as f64).sum::<f64>() / n;

    let (sxx, sxy) = samples.iter().fold((0.0, 0.0), |(sxx, sxy), s| {
        let dx = s.mileage as f64 - mean_x;
        let dy = s.price as f64 - mean_y;
        (sxx + dx * dx, sxy + dx * dy)
    });

    let slope = sxy / sxx;
    ModelParams::new(slope, mean_y - slope * mean_x)
}

fn assert_relative(got: f64, expected: f64, tol: f64) {
    let err = (got - expected).abs() / expected.abs().max(f64::MIN_POSITIVE);
    assert!(err < tol, "got {got}, expected {expected} (relative error {err})");
}

#[test]
fn test_gradient_descent_matches_least_squares() {
    for samples in [cars(), line()] {
        let fit = Trainer::new(tight_config()).unwrap().fit(&samples).unwrap();
        let expected = least_squares(&samples);

        assert!(fit.outcome().is_converged());
        assert_relative(fit.params().slope, expected.slope, 1e-6);
        if expected.intercept.abs() > 1e-9 {
            assert_relative(fit.params().intercept, expected.intercept, 1e-6);
        } else {
            assert!(fit.params().intercept.abs() < 1e-6);
        }
    }
}

#[test]
fn test_cold_model_predicts_zero() {
    let model = LinearModel::new();

    assert_eq!(model.params(), ModelParams::default());
    for mileage in [-1e9, -1.0, 0.0, 0.5, 60949.0, 1e12] {
        assert_eq!(model.estimate(mileage), 0.0);
    }
}

#[test]
fn test_ssr_never_increases_along_the_trace() {
    let samples = cars();
    let fit = Trainer::new(TrainingConfig::default())
        .unwrap()
        .fit(&samples)
        .unwrap();

    let normalized = fit.normalizer().normalize(&samples);
    let loss_fn = Ssr::new();
    let losses: Vec<f64> = std::iter::once(NormalizedParams::default())
        .chain(fit.trace())
        .map(|p| loss_fn.loss(p, &normalized))
        .collect();

    assert!(losses.len() > 2);
    for pair in losses.windows(2) {
        assert!(
            pair[1] <= pair[0] + 1e-12,
            "ssr went up from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_mileage_scale_does_not_change_predictions() {
    let samples = cars();
    let mut model = LinearModel::new();
    model.train(&samples, TrainingConfig::default()).unwrap();

    for k in [1000, -3] {
        let scaled = SampleSet::new(
            samples.mileages().iter().map(|&x| x * k).collect(),
            samples.prices().to_vec(),
        )
        .unwrap();

        let mut scaled_model = LinearModel::new();
        scaled_model
            .train(&scaled, TrainingConfig::default())
            .unwrap();

        for &mileage in samples.mileages() {
            let expected = model.estimate(mileage as f64);
            let got = scaled_model.estimate((mileage * k) as f64);
            assert_relative(got, expected, 1e-9);
        }
    }
}

#[test]
fn test_constant_mileage_is_rejected_before_any_iteration() {
    let samples = SampleSet::from_pairs(&[(50000, 4000), (50000, 5000), (50000, 6000)]).unwrap();

    let mut trainer = Trainer::new(TrainingConfig::default()).unwrap();
    let err = trainer.fit(&samples).unwrap_err();
    assert_eq!(err, InvalidInput::ZeroVariance { series: "mileage" });
    assert_eq!(trainer.state(), TrainingState::Initialized);

    let mut model = LinearModel::new();
    assert!(model.train(&samples, TrainingConfig::default()).is_err());
    assert!(model.trace().is_empty());
}

#[test]
fn test_perfect_line_end_to_end() {
    let mut model = LinearModel::new();
    let outcome = model.train(&line(), TrainingConfig::default()).unwrap();

    assert!(outcome.is_converged());
    assert!(outcome.iterations() < 1000);
    assert_eq!(model.trace().len(), outcome.iterations());

    let params = model.params();
    assert!((params.slope - 10.0).abs() < 0.5, "slope {}", params.slope);
    assert!(params.intercept.abs() < 0.5, "intercept {}", params.intercept);
    assert!((model.estimate(4.0) - 40.0).abs() < 0.5);
}

#[test]
fn test_cap_of_one_iteration() {
    let config = TrainingConfig::default().with_max_iterations(NonZeroUsize::new(1).unwrap());
    let mut trainer = Trainer::new(config).unwrap();
    let fit = trainer.fit(&line()).unwrap();

    assert_eq!(fit.outcome(), Outcome::IterationCapReached { iterations: 1 });
    assert_eq!(trainer.state(), TrainingState::IterationCapReached);
    assert_eq!(fit.trace().len(), 1);

    // one step from the origin: slope_n = lr * 2 * N * r = 0.01 * 2 * 3 * 1
    assert!((fit.normalized_params().slope - 0.06).abs() < 1e-12);
    assert!((fit.params().slope - 0.6).abs() < 1e-9);
}

#[test]
fn test_trace_can_be_walked_more_than_once() {
    let fit = Trainer::new(TrainingConfig::default())
        .unwrap()
        .fit(&cars())
        .unwrap();

    let first: Vec<_> = fit.trace().iter().collect();
    let second: Vec<_> = fit.trace().into_iter().collect();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first.len(), fit.outcome().iterations());
}

#[test]
fn test_mismatched_or_empty_samples_are_invalid() {
    assert_eq!(
        SampleSet::new(vec![], vec![]).unwrap_err(),
        InvalidInput::EmptySamples
    );
    assert!(matches!(
        SampleSet::new(vec![1, 2], vec![3]),
        Err(InvalidInput::LengthMismatch {
            mileages: 2,
            prices: 1
        })
    ));
}
