//! SVG rendering of the daily emotion trend

mod io;
mod svg;

pub use io::atomic_write;
pub use svg::{render_svg, SvgChartRenderer};
