pub mod geometry;
pub mod line_chart;

pub use line_chart::LineChart;
