use std::path::Path;

use log::info;
use plotters::{coord::Shift, prelude::*};

use super::{is_svg, Result, PLOT_HEIGHT, PLOT_WIDTH};
use crate::{
    dataset::NormalizedSamples,
    loss::Ssr,
    params::NormalizedParams,
    training::GradientTrace,
};

const GRID_STEPS: usize = 60;
const MIN_SPAN: f64 = 2.0;

/// The SSR evaluated over a regular slope × intercept grid in normalized space.
#[derive(Debug, Clone, PartialEq)]
pub struct SsrGrid {
    slopes: Vec<f64>,
    intercepts: Vec<f64>,
    // row major, one row per slope
    values: Vec<f64>,
}

impl SsrGrid {
    /// Evaluates the SSR of `samples` at every grid node.
    ///
    /// # Arguments
    /// * `samples` - The normalized training samples.
    /// * `slopes` - Inclusive slope range.
    /// * `intercepts` - Inclusive intercept range.
    /// * `steps` - Number of nodes along each axis.
    pub fn compute(
        samples: &NormalizedSamples,
        slopes: (f64, f64),
        intercepts: (f64, f64),
        steps: usize,
    ) -> Self {
        let loss_fn = Ssr::new();
        let slopes = linspace(slopes.0, slopes.1, steps);
        let intercepts = linspace(intercepts.0, intercepts.1, steps);

        let values = slopes
            .iter()
            .flat_map(|&m| {
                intercepts
                    .iter()
                    .map(move |&b| loss_fn.loss(NormalizedParams::new(m, b), samples))
            })
            .collect();

        Self {
            slopes,
            intercepts,
            values,
        }
    }

    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    pub fn intercepts(&self) -> &[f64] {
        &self.intercepts
    }

    /// The SSR at the `i`-th slope and `j`-th intercept.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.intercepts.len() + j]
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Every grid cell as its four `(intercept, ssr, slope)` corners plus the
    /// mean SSR of those corners.
    fn cells(&self) -> impl Iterator<Item = ([(f64, f64, f64); 4], f64)> + '_ {
        let rows = self.slopes.len().saturating_sub(1);
        let cols = self.intercepts.len().saturating_sub(1);

        (0..rows).flat_map(move |i| {
            (0..cols).map(move |j| {
                let corner =
                    |i: usize, j: usize| (self.intercepts[j], self.value(i, j), self.slopes[i]);
                let corners = [
                    corner(i, j),
                    corner(i, j + 1),
                    corner(i + 1, j + 1),
                    corner(i + 1, j),
                ];
                let mean = corners.iter().map(|c| c.1).sum::<f64>() / 4.0;
                (corners, mean)
            })
        })
    }
}

/// Draws the SSR surface around the optimum with the descent path on top.
///
/// The surface lives in normalized space, the same space the trace does.
///
/// # Arguments
/// * `path` - Output file; `.svg` produces a vector image, anything else a bitmap.
/// * `samples` - The normalized training samples.
/// * `params` - The final normalized parameters, marked on the surface.
/// * `trace` - The descent path to overlay, if any.
///
/// # Errors
/// `RenderErr::Draw` if the backend fails to draw or write the file.
pub fn render_ssr_surface<P: AsRef<Path>>(
    path: P,
    samples: &NormalizedSamples,
    params: NormalizedParams,
    trace: Option<&GradientTrace>,
) -> Result<()> {
    let path = path.as_ref();
    let size = (PLOT_WIDTH, PLOT_HEIGHT);

    let span = [MIN_SPAN, params.slope.abs() + 0.5, params.intercept.abs() + 0.5]
        .into_iter()
        .fold(0.0, f64::max);
    let grid = SsrGrid::compute(samples, (-span, span), (-span, span), GRID_STEPS);

    if is_svg(path) {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_surface(&root, &grid, samples, params, trace)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_surface(&root, &grid, samples, params, trace)?;
    }

    info!("ssr surface written to {}", path.display());
    Ok(())
}

fn draw_surface<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    grid: &SsrGrid,
    samples: &NormalizedSamples,
    params: NormalizedParams,
    trace: Option<&GradientTrace>,
) -> Result<()> {
    root.fill(&WHITE)?;

    let loss_fn = Ssr::new();
    let z_max = grid.max().max(f64::MIN_POSITIVE);
    let (b_min, b_max) = bounds(grid.intercepts());
    let (m_min, m_max) = bounds(grid.slopes());

    let mut chart = ChartBuilder::on(root)
        .caption("Sum of Squared Residuals (normalized)", ("sans-serif", 28))
        .margin(15)
        .build_cartesian_3d(b_min..b_max, 0.0..z_max * 1.05, m_min..m_max)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.35;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    chart.draw_series(grid.cells().map(|(corners, mean)| {
        let hue = (1.0 - mean / z_max) * 0.66;
        Polygon::new(corners.to_vec(), HSLColor(hue, 0.7, 0.5).mix(0.6).filled())
    }))?;

    if let Some(trace) = trace {
        let start = NormalizedParams::default();
        let path = std::iter::once(start)
            .chain(trace.iter())
            .map(|p| (p.intercept, loss_fn.loss(p, samples), p.slope));

        chart.draw_series(LineSeries::new(path, BLACK.stroke_width(2)))?;
    }

    let end = (params.intercept, loss_fn.loss(params, samples), params.slope);
    chart.draw_series(std::iter::once(Circle::new(end, 5, RED.filled())))?;

    root.present()?;
    Ok(())
}

fn bounds(values: &[f64]) -> (f64, f64) {
    let first = values.first().copied().unwrap_or_default();
    let last = values.last().copied().unwrap_or_default();
    (first.min(last), first.max(last))
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> NormalizedSamples {
        let s = 1.5_f64.sqrt();
        NormalizedSamples::new(vec![-s, 0.0, s], vec![-s, 0.0, s])
    }

    #[test]
    fn test_linspace_includes_both_ends() {
        assert_eq!(linspace(-2.0, 2.0, 5), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(linspace(1.0, 3.0, 1), vec![1.0]);
        assert!(linspace(1.0, 3.0, 0).is_empty());
    }

    #[test]
    fn test_grid_values_are_the_ssr() {
        let samples = samples();
        let grid = SsrGrid::compute(&samples, (-2.0, 2.0), (-1.0, 1.0), 5);

        assert_eq!(grid.slopes().len(), 5);
        assert_eq!(grid.intercepts().len(), 5);

        let loss_fn = Ssr::new();
        for (i, &m) in grid.slopes().iter().enumerate() {
            for (j, &b) in grid.intercepts().iter().enumerate() {
                let expected = loss_fn.loss(NormalizedParams::new(m, b), &samples);
                assert_eq!(grid.value(i, j), expected);
            }
        }
    }

    #[test]
    fn test_grid_minimum_sits_at_the_least_squares_line() {
        // y = x exactly, so the minimum is at slope 1, intercept 0
        let grid = SsrGrid::compute(&samples(), (-2.0, 2.0), (-2.0, 2.0), 5);

        assert!(grid.value(3, 2).abs() < 1e-12);
        assert!((0..5).all(|i| (0..5).all(|j| grid.value(i, j) >= grid.value(3, 2))));
        assert_eq!(grid.cells().count(), 16);
    }
}
