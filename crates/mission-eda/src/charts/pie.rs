//! Pie chart for categorical shares.

use anyhow::{Context, Result, ensure};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

const SIZE: u32 = 900;

/// Pie chart of category counts, colors cycled from `palette`.
pub fn pie_chart(
    path: &Path,
    title: &str,
    entries: &[(String, u32)],
    palette: &[RGBColor],
) -> Result<()> {
    ensure!(!entries.is_empty(), "no values to plot");
    ensure!(!palette.is_empty(), "palette must not be empty");
    ensure!(
        entries.iter().any(|(_, count)| *count > 0),
        "all counts are zero"
    );

    let root = BitMapBackend::new(path, (SIZE, SIZE)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 28))?;

    let (width, height) = root.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = width.min(height) as f64 * 0.35;

    let sizes: Vec<f64> = entries.iter().map(|(_, count)| *count as f64).collect();
    let colors: Vec<RGBColor> = (0..entries.len())
        .map(|i| palette[i % palette.len()])
        .collect();
    let labels: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(140.0);
    pie.label_style(("sans-serif", 20).into_font());
    pie.percentages(("sans-serif", 16).into_font());
    root.draw(&pie)?;

    root.present()
        .with_context(|| format!("Failed to write chart image: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::style::STATUS_PIE_COLORS;

    #[test]
    fn test_pie_chart_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.png");
        let entries = vec![
            ("Success".to_string(), 90),
            ("Failure".to_string(), 8),
            ("Partial Failure".to_string(), 2),
        ];
        pie_chart(&path, "Mission Outcomes", &entries, &STATUS_PIE_COLORS).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_all_zero_counts_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.png");
        let entries = vec![("Success".to_string(), 0)];
        assert!(pie_chart(&path, "Mission Outcomes", &entries, &STATUS_PIE_COLORS).is_err());
    }
}
