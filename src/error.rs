use thiserror::Error;

pub type GestureResult<T> = Result<T, GestureError>;

#[derive(Debug, Error)]
pub enum GestureError {
    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid gesture config: {0}")]
    InvalidConfig(String),

    #[error("y-axis index {index} out of range (axis count {count})")]
    AxisOutOfRange { index: usize, count: usize },
}
