mod error;
mod fit;
mod surface;

use std::path::Path;

pub use error::{RenderErr, Result};
pub use fit::render_fit;
pub use surface::{render_ssr_surface, SsrGrid};

const PLOT_WIDTH: u32 = 1024;
const PLOT_HEIGHT: u32 = 768;

/// `.svg` paths get the SVG backend, anything else is rasterized.
fn is_svg(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Range bounds of `values` widened by 5% on each side.
fn padded_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}
