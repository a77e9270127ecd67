use std::{
    error::Error,
    fmt::{self, Display},
};

use plotters::drawing::DrawingAreaErrorKind;

/// The render module's result type.
pub type Result<T> = std::result::Result<T, RenderErr>;

/// Failures while drawing a plot.
#[derive(Debug)]
pub enum RenderErr {
    /// The drawing backend failed, e.g. the output file could not be written.
    Draw(String),
}

impl Display for RenderErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderErr::Draw(msg) => write!(f, "failed to draw plot: {msg}"),
        }
    }
}

impl Error for RenderErr {}

impl<E: Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderErr {
    fn from(value: DrawingAreaErrorKind<E>) -> Self {
        Self::Draw(value.to_string())
    }
}
