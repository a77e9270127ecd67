use std::path::Path;

use log::info;
use plotters::{coord::Shift, prelude::*};

use super::{is_svg, padded_bounds, Result, PLOT_HEIGHT, PLOT_WIDTH};
use crate::{dataset::SampleSet, params::ModelParams};

/// Draws the samples as a scatter plot with the fitted line on top.
///
/// # Arguments
/// * `path` - Output file; `.svg` produces a vector image, anything else a bitmap.
/// * `samples` - The original mileage/price pairs.
/// * `params` - The fitted line in original units.
///
/// # Errors
/// `RenderErr::Draw` if the backend fails to draw or write the file.
pub fn render_fit<P: AsRef<Path>>(
    path: P,
    samples: &SampleSet,
    params: ModelParams,
) -> Result<()> {
    let path = path.as_ref();
    let size = (PLOT_WIDTH, PLOT_HEIGHT);

    if is_svg(path) {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_fit(&root, samples, params)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_fit(&root, samples, params)?;
    }

    info!("regression plot written to {}", path.display());
    Ok(())
}

fn draw_fit<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    samples: &SampleSet,
    params: ModelParams,
) -> Result<()> {
    root.fill(&WHITE)?;

    let points: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| (s.mileage as f64, s.price as f64))
        .collect();

    let (x_min, x_max) = padded_bounds(points.iter().map(|p| p.0));
    let line = [(x_min, params.apply(x_min)), (x_max, params.apply(x_max))];
    let (y_min, y_max) = padded_bounds(points.iter().chain(&line).map(|p| p.1));

    let mut chart = ChartBuilder::on(root)
        .caption("Linear Regression: Mileage vs Price", ("sans-serif", 28))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Mileage (km)")
        .y_desc("Price")
        .draw()?;

    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 4, BLUE.filled())))?
        .label("Data")
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    chart
        .draw_series(LineSeries::new(line, RED.stroke_width(2)))?
        .label("Regression Line")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
