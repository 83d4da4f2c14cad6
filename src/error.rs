use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart geometry: height={height}")]
    InvalidGeometry { height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
