pub mod config;
pub mod data;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod metrics;
pub mod model;
pub mod normalizer;
pub mod optimization;
pub mod params;
pub mod render;
pub mod training;

pub use config::TrainingConfig;
pub use dataset::{NormalizedSamples, Sample, SampleSet};
pub use error::{InvalidInput, Result};
pub use metrics::Precision;
pub use model::LinearModel;
pub use normalizer::{Normalizer, Statistics};
pub use params::{ModelParams, NormalizedParams};
pub use training::{Fit, GradientTrace, Outcome, Trainer, TrainingState};
