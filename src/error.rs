use thiserror::Error;

pub type RulerResult<T> = Result<T, RulerError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulerError {
    #[error("invalid range: lower={lower}, upper={upper} (lower must be < upper and both finite)")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("invalid allocation: width={width}, height={height}")]
    InvalidAllocation { width: i32, height: i32 },

    #[error(
        "invalid interval input: pixel_span={pixel_span}, min_spacing={min_spacing}, range_size={range_size}"
    )]
    InvalidIntervalInput {
        pixel_span: i32,
        min_spacing: i32,
        range_size: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
