//! Line chart of daily average emotion

use crate::io::atomic_write;
use plotters::prelude::*;
use solace_core::{ChartError, ChartRenderer, EmotionCategory, TrendPoint};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::debug;

const TITLE: &str = "Daily Emotion Trend (average per day)";
const DEFAULT_SIZE: (u32, u32) = (1440, 640);

// Padding around the 0..=3 ordinal range so markers on the edges stay visible
const Y_MIN: f64 = -0.2;
const Y_MAX: f64 = 3.2;

/// Writes the trend chart as SVG to a fixed path, replacing it each time
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    path: PathBuf,
}

impl SvgChartRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, points: &[TrendPoint]) -> Result<PathBuf, ChartError> {
        let svg = render_svg(points, DEFAULT_SIZE)?;
        atomic_write(&self.path, svg.as_bytes())?;
        debug!(path = %self.path.display(), bytes = svg.len(), "wrote chart");
        Ok(self.path.clone())
    }
}

/// Draw the series into an in-memory SVG document
pub fn render_svg(points: &[TrendPoint], size: (u32, u32)) -> Result<String, ChartError> {
    if points.is_empty() {
        return Err(ChartError::Render("no trend data to draw".to_string()));
    }

    let labels: Vec<String> = points
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let series: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.average))
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let x_max = points.len() as f64 - 0.5;
        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(120)
            .build_cartesian_2d(-0.5f64..x_max, Y_MIN..Y_MAX)
            .map_err(render_error)?;

        let x_label = |x: &f64| date_label(&labels, *x);
        let y_label = |y: &f64| level_label(*y);
        chart
            .configure_mesh()
            .x_labels(points.len() + 1)
            .y_labels(EmotionCategory::ALL.len())
            .x_label_formatter(&x_label)
            .y_label_formatter(&y_label)
            .x_desc("Date")
            .y_desc("Emotion Level")
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(series.iter().copied(), BLUE.stroke_width(2)))
            .map_err(render_error)?;
        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 5, BLUE.filled())),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    Ok(svg)
}

fn render_error(err: impl Display) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Date under an integral x position, blank between days
fn date_label(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Category name at each integral ordinal, blank elsewhere
fn level_label(y: f64) -> String {
    let level = y.round();
    if (y - level).abs() > 1e-6 || !(0.0..=3.0).contains(&level) {
        return String::new();
    }
    EmotionCategory::from_ordinal(level as u8)
        .map(|c| c.to_string())
        .unwrap_or_default()
}
