/// Slope and intercept in normalized space, where both variables have zero
/// mean and unit variance.
///
/// These are what gradient descent mutates. They are meaningless as price
/// predictions until a `Normalizer` maps them back into `ModelParams`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NormalizedParams {
    pub slope: f64,
    pub intercept: f64,
}

impl NormalizedParams {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The line evaluated at a normalized mileage.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Slope and intercept in the original units of mileage and price.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelParams {
    pub slope: f64,
    pub intercept: f64,
}

impl ModelParams {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The line evaluated at a raw mileage.
    #[inline]
    pub fn apply(&self, mileage: f64) -> f64 {
        self.intercept + self.slope * mileage
    }
}
