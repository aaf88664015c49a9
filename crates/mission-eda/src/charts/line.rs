//! Line chart for the yearly launch trend.

use anyhow::{Context, Result, ensure};
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 700;

/// Line chart over (year, count) points, sorted by year by the caller.
pub fn line_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(i32, u32)],
    color: &RGBColor,
) -> Result<()> {
    ensure!(!points.is_empty(), "no values to plot");

    let min_year = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max_year = points.iter().map(|p| p.0).max().unwrap_or(0);
    let max_count = points.iter().map(|p| p.1).max().unwrap_or(0);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(min_year..max_year + 1, 0u32..max_count + max_count / 10 + 1)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        color.stroke_width(3),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
    )?;

    root.present()
        .with_context(|| format!("Failed to write chart image: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::style::TREND_LINE_COLOR;

    #[test]
    fn test_line_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.png");
        let points = vec![(2018, 3), (2019, 7), (2020, 12), (2021, 9)];
        line_chart(
            &path,
            "Yearly Launches",
            "Year",
            "Number of Launches",
            &points,
            &TREND_LINE_COLOR,
        )
        .unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_single_year_is_plottable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend.png");
        line_chart(
            &path,
            "Yearly Launches",
            "Year",
            "Number of Launches",
            &[(2020, 5)],
            &TREND_LINE_COLOR,
        )
        .unwrap();
        assert!(path.exists());
    }
}
