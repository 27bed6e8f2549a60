//! Bucket bar chart: pure layout, vector primitives and the SVG view.

pub mod draw;
pub mod layout;
mod view;

pub use layout::{ChartGeometry, ChartLayout};
pub use view::BucketChart;
