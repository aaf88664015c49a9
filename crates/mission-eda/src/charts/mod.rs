//! Chart rendering via plotters.
//!
//! Each chart type is a standalone function writing a PNG to a caller-chosen
//! path. Data selection and ordering happen in [`crate::stats`]; this module
//! only draws what it is given.

mod bars;
mod heatmap;
mod line;
mod pie;
pub mod style;

pub use bars::{horizontal_bar_chart, vertical_bar_chart};
pub use heatmap::missing_values_heatmap;
pub use line::line_chart;
pub use pie::pie_chart;
