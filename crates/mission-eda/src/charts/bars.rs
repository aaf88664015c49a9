//! Ranked bar charts over segmented category axes.

use super::style::Gradient;
use anyhow::{Context, Result, ensure};
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 700;

/// Horizontal bar chart for a ranked list. `entries` come ordered from
/// largest to smallest; the first entry is drawn at the top.
///
/// `x_max` pins the value axis (the success-rate chart fixes it to 1.0);
/// when `None` the axis scales to the data.
pub fn horizontal_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    entries: &[(String, f64)],
    gradient: &Gradient,
    x_max: Option<f64>,
) -> Result<()> {
    ensure!(!entries.is_empty(), "no values to plot");

    // Segmented rows grow upward, so draw bottom-to-top.
    let rows: Vec<&(String, f64)> = entries.iter().rev().collect();
    let data_max = entries.iter().map(|e| e.1).fold(0.0_f64, f64::max);
    let max_x = x_max.unwrap_or(data_max * 1.05).max(1e-9);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(240)
        .build_cartesian_2d(0f64..max_x, (0usize..rows.len()).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .y_labels(rows.len())
        .y_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => rows
                .get(*i)
                .map(|(name, _)| name.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, (_, value))| {
        // Rank 0 (top row) takes the start of the ramp.
        let color = gradient.sample(rows.len() - 1 - i, rows.len());
        let mut bar = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (*value, SegmentValue::Exact(i + 1)),
            ],
            color.filled(),
        );
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart image: {}", path.display()))?;
    Ok(())
}

/// Vertical bar chart with one bar per category, colors cycled from
/// `palette`.
pub fn vertical_bar_chart(
    path: &Path,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    entries: &[(String, f64)],
    palette: &[RGBColor],
) -> Result<()> {
    ensure!(!entries.is_empty(), "no values to plot");
    ensure!(!palette.is_empty(), "palette must not be empty");

    let max_y = entries
        .iter()
        .map(|e| e.1)
        .fold(0.0_f64, f64::max)
        .max(1e-9)
        * 1.1;

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(56)
        .y_label_area_size(64)
        .build_cartesian_2d((0usize..entries.len()).into_segmented(), 0f64..max_y)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(entries.len())
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => entries
                .get(*i)
                .map(|(name, _)| name.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(i, (_, value))| {
        let color = palette[i % palette.len()];
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), *value),
            ],
            color.filled(),
        );
        bar.set_margin(0, 0, 10, 10);
        bar
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart image: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::style::COOLWARM;

    #[test]
    fn test_horizontal_bar_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.png");
        let entries = vec![
            ("SpaceX".to_string(), 30.0),
            ("ULA".to_string(), 12.0),
            ("Rocket Lab".to_string(), 5.0),
        ];
        horizontal_bar_chart(
            &path,
            "Launches",
            "Number of Launches",
            "Company",
            &entries,
            &COOLWARM,
            None,
        )
        .unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_empty_entries_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bars.png");
        let result = horizontal_bar_chart(
            &path,
            "Launches",
            "x",
            "y",
            &[],
            &COOLWARM,
            None,
        );
        assert!(result.is_err());
        assert!(!path.exists());
    }
}
