use std::fmt::{self, Display};

/// The phases a `Trainer` goes through during a single `fit` call.
///
/// `Converged` and `IterationCapReached` are terminal. A failed precondition
/// sends the trainer back to `Initialized`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrainingState {
    #[default]
    Initialized,
    Normalizing,
    Iterating,
    Converged,
    IterationCapReached,
}

impl Display for TrainingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainingState::Initialized => "initialized",
            TrainingState::Normalizing => "normalizing",
            TrainingState::Iterating => "iterating",
            TrainingState::Converged => "converged",
            TrainingState::IterationCapReached => "iteration cap reached",
        };

        write!(f, "{s}")
    }
}

/// How a successful training run ended.
///
/// Both variants yield a usable model; reaching the cap only means the
/// parameters may be under-converged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The gradient fell below the tolerance after `iterations` updates.
    Converged { iterations: usize },
    /// All `iterations` updates were spent without meeting the tolerance.
    IterationCapReached { iterations: usize },
}

impl Outcome {
    /// The number of parameter updates that were applied.
    pub fn iterations(&self) -> usize {
        match *self {
            Outcome::Converged { iterations } | Outcome::IterationCapReached { iterations } => {
                iterations
            }
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Outcome::Converged { .. })
    }

    /// The terminal `TrainingState` this outcome corresponds to.
    pub fn state(&self) -> TrainingState {
        match self {
            Outcome::Converged { .. } => TrainingState::Converged,
            Outcome::IterationCapReached { .. } => TrainingState::IterationCapReached,
        }
    }
}
