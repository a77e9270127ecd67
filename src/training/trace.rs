use std::{iter::Copied, slice};

use crate::params::NormalizedParams;

/// The normalized parameters after every update of a training run, in order.
///
/// Only used for diagnostics; training never reads it back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientTrace {
    points: Vec<NormalizedParams>,
}

impl GradientTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, params: NormalizedParams) {
        self.points.push(params);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The parameters produced by the last update, if any.
    pub fn last(&self) -> Option<NormalizedParams> {
        self.points.last().copied()
    }

    /// Iterates the trace from the first update. Each call starts over.
    pub fn iter(&self) -> Copied<slice::Iter<'_, NormalizedParams>> {
        self.points.iter().copied()
    }

    pub fn as_slice(&self) -> &[NormalizedParams] {
        &self.points
    }
}

impl<'a> IntoIterator for &'a GradientTrace {
    type Item = NormalizedParams;
    type IntoIter = Copied<slice::Iter<'a, NormalizedParams>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
