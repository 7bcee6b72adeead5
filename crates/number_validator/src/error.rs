use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormatError {
    #[error("precision must be a positive number, got {precision}")]
    NonPositivePrecision { precision: i32 },
    #[error("scale must be non-negative and less than precision {precision}, got {scale}")]
    ScaleOutOfRange { precision: i32, scale: i32 },
}
