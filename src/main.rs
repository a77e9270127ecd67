use std::{num::NonZeroUsize, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;
use log::info;

use linear_regression::{data::SampleLoader, loss, render, Outcome, Trainer, TrainingConfig};

// Shown when no mileage is given on the command line.
const DEFAULT_ESTIMATES: [f64; 3] = [99_980.0, 300.0, 200_000.0];

#[derive(Debug, Parser)]
#[command(
    name = "linear-regression",
    about = "Train a linear regression model on car price data",
    version
)]
struct Cli {
    /// CSV file containing the data (must include 'km' and 'price' columns)
    #[arg(value_name = "DATA_FILE")]
    data_file: PathBuf,

    /// JSON file with training hyperparameters, flags below override it
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Learning rate for gradient descent
    #[arg(long = "learning-rate", value_name = "RATE")]
    learning_rate: Option<f64>,

    /// Maximum number of training iterations
    #[arg(short = 'n', long, value_name = "N")]
    iterations: Option<NonZeroUsize>,

    /// Gradient magnitude under which training is considered converged
    #[arg(long, value_name = "EPSILON")]
    epsilon: Option<f64>,

    /// Mileage to estimate a price for (repeatable)
    #[arg(short = 'e', long = "estimate", value_name = "MILEAGE")]
    estimates: Vec<f64>,

    /// Write the data and regression line plot to this file (.svg or bitmap)
    #[arg(long, value_name = "PATH")]
    plot: Option<PathBuf>,

    /// Write the sum of squared residuals surface plot to this file
    #[arg(long, value_name = "PATH")]
    surface: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then explicit flags.
    fn training_config(&self) -> anyhow::Result<TrainingConfig> {
        let mut config = match &self.config {
            Some(path) => TrainingConfig::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => TrainingConfig::default(),
        };

        if let Some(learning_rate) = self.learning_rate {
            config = config.with_learning_rate(learning_rate);
        }
        if let Some(iterations) = self.iterations {
            config = config.with_max_iterations(iterations);
        }
        if let Some(epsilon) = self.epsilon {
            config = config.with_convergence_epsilon(epsilon);
        }

        Ok(config)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.training_config()?;
    let samples = SampleLoader::new()
        .load(&cli.data_file)
        .with_context(|| format!("failed to load {}", cli.data_file.display()))?;

    let fit = Trainer::new(config)?.fit(&samples)?;
    match fit.outcome() {
        Outcome::Converged { iterations } => {
            println!("Training converged after {iterations} iterations")
        }
        Outcome::IterationCapReached { iterations } => {
            println!("Training stopped at the cap of {iterations} iterations")
        }
    }

    if let Some(path) = &cli.surface {
        let normalized = fit.normalizer().normalize(&samples);
        render::render_ssr_surface(
            path,
            &normalized,
            fit.normalized_params(),
            Some(fit.trace()),
        )?;
    }

    let model = fit.into_model();
    let params = model.params();
    info!(slope = params.slope, intercept = params.intercept; "model ready");

    println!("Model Precision: {}", model.precision(&samples));
    println!(
        "Sum of squared residuals: {:.2}",
        loss::ssr(params, &samples)
    );

    let estimates = if cli.estimates.is_empty() {
        DEFAULT_ESTIMATES.to_vec()
    } else {
        cli.estimates.clone()
    };
    for mileage in estimates {
        println!(
            "Predicted price for mileage {mileage}: {:.2}",
            model.estimate(mileage)
        );
    }

    if let Some(path) = &cli.plot {
        render::render_fit(path, &samples, params)?;
    }

    Ok(())
}
