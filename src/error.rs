use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate viewport: width={width}, height={height}")]
    DegenerateViewport { width: f64, height: f64 },
}
