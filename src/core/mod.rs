pub mod geometry;
pub mod scale;
pub mod types;

pub use scale::{AxisScale, LOG_SCALE_BASE};
pub use types::{DataPoint, DataRange, PlotArea, ScreenPoint};
