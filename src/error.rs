use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used by the training core.
pub type Result<T> = std::result::Result<T, InvalidInput>;

/// Precondition violations detected before a training run starts.
///
/// None of these are transient, so nothing in the crate retries on them.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// The sample set has no rows.
    EmptySamples,
    /// The mileage and price sequences are not paired one to one.
    LengthMismatch { mileages: usize, prices: usize },
    /// Every value of a series is identical, so its standard deviation is zero.
    ZeroVariance { series: &'static str },
    /// A hyperparameter is outside of its valid domain.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptySamples => write!(f, "invalid input: the sample set is empty"),
            InvalidInput::LengthMismatch { mileages, prices } => write!(
                f,
                "invalid input: got {mileages} mileages but {prices} prices"
            ),
            InvalidInput::ZeroVariance { series } => write!(
                f,
                "invalid input: every {series} value is identical, standard deviation is zero"
            ),
            InvalidInput::InvalidConfig { field, reason } => {
                write!(f, "invalid config: {field} {reason}")
            }
        }
    }
}

impl Error for InvalidInput {}
