//! Missing-value heatmap over the whole table.

use super::style;
use anyhow::{Context, Result, ensure};
use plotters::prelude::*;
use polars::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Render the null mask of the table: one cell per value, present cells in
/// the base color, missing cells highlighted. Row 0 is drawn at the top.
pub fn missing_values_heatmap(path: &Path, title: &str, df: &DataFrame) -> Result<()> {
    let n_rows = df.height();
    let n_cols = df.width();
    ensure!(n_rows > 0 && n_cols > 0, "empty table");

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(80)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..n_cols as f64, 0f64..n_rows as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n_cols)
        .x_label_formatter(&|v| {
            names
                .get(*v as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_label_formatter(&|v| format!("{}", (n_rows as f64 - v).max(0.0) as usize))
        .draw()?;

    // Base layer: everything present.
    chart.draw_series(std::iter::once(Rectangle::new(
        [(0.0, 0.0), (n_cols as f64, n_rows as f64)],
        style::HEATMAP_PRESENT.filled(),
    )))?;

    // Highlight layer: one cell per missing value.
    let mut missing_cells = Vec::new();
    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let mask = column.as_materialized_series().is_null();
        for row_idx in 0..n_rows {
            if mask.get(row_idx).unwrap_or(false) {
                missing_cells.push((col_idx, row_idx));
            }
        }
    }
    chart.draw_series(missing_cells.iter().map(|&(c, r)| {
        Rectangle::new(
            [
                (c as f64, (n_rows - 1 - r) as f64),
                ((c + 1) as f64, (n_rows - r) as f64),
            ],
            style::HEATMAP_MISSING.filled(),
        )
    }))?;

    root.present()
        .with_context(|| format!("Failed to write chart image: {}", path.display()))?;
    Ok(())
}
