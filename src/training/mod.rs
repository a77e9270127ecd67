mod state;
mod trace;
mod trainer;

pub use state::{Outcome, TrainingState};
pub use trace::GradientTrace;
pub use trainer::{Fit, Trainer};
