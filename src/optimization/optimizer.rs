use crate::{loss::Gradient, params::NormalizedParams};

pub trait Optimizer {
    fn update_params(&mut self, params: &mut NormalizedParams, grad: Gradient);
}
