//! Fixed palettes used across the charts.
//!
//! Colors match the established look of the mission reports: a green /
//! red / yellow / gray cycle for outcome shares, soft tones for the status
//! bars, and two-endpoint ramps for the ranked bar charts.

use plotters::style::RGBColor;

/// Outcome pie colors: green, red, yellow, gray, cycled as needed.
pub const STATUS_PIE_COLORS: [RGBColor; 4] = [
    RGBColor(46, 204, 113),
    RGBColor(231, 76, 60),
    RGBColor(241, 196, 15),
    RGBColor(149, 165, 166),
];

/// Soft palette for the status bar chart.
pub const STATUS_BAR_COLORS: [RGBColor; 6] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 160),
    RGBColor(208, 187, 255),
    RGBColor(222, 196, 176),
];

/// Line color for the yearly launch trend.
pub const TREND_LINE_COLOR: RGBColor = RGBColor(52, 152, 219);

/// Heatmap cell color for present values.
pub const HEATMAP_PRESENT: RGBColor = RGBColor(68, 1, 84);

/// Heatmap cell color for missing values.
pub const HEATMAP_MISSING: RGBColor = RGBColor(253, 231, 37);

/// A linear two-endpoint color ramp.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    start: RGBColor,
    end: RGBColor,
}

impl Gradient {
    pub const fn new(start: RGBColor, end: RGBColor) -> Self {
        Self { start, end }
    }

    /// Color for position `index` out of `total` evenly spaced samples.
    pub fn sample(&self, index: usize, total: usize) -> RGBColor {
        let t = if total <= 1 {
            0.0
        } else {
            index as f64 / (total - 1) as f64
        };
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        RGBColor(
            lerp(self.start.0, self.end.0),
            lerp(self.start.1, self.end.1),
            lerp(self.start.2, self.end.2),
        )
    }
}

/// Cool blue to warm red, for the launch-count ranking.
pub const COOLWARM: Gradient = Gradient::new(RGBColor(59, 76, 192), RGBColor(180, 4, 38));

/// Dark purple to yellow, for the success-rate ranking.
pub const VIRIDIS: Gradient = Gradient::new(RGBColor(68, 1, 84), RGBColor(253, 231, 37));

/// Near-black to pale orange, for the rocket-usage ranking.
pub const MAGMA: Gradient = Gradient::new(RGBColor(24, 15, 61), RGBColor(252, 187, 97));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let g = Gradient::new(RGBColor(0, 0, 0), RGBColor(100, 200, 50));
        assert_eq!(g.sample(0, 5), RGBColor(0, 0, 0));
        assert_eq!(g.sample(4, 5), RGBColor(100, 200, 50));
    }

    #[test]
    fn test_gradient_single_sample() {
        let g = COOLWARM;
        // A single bar takes the start color instead of dividing by zero.
        assert_eq!(g.sample(0, 1), g.sample(0, 2));
    }
}
