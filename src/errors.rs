use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchReportError {
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("invalid measurement: {0}")]
    InvalidMeasurement(String),
}

impl BenchReportError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        BenchReportError::ParseError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        BenchReportError::SchemaError(msg.into())
    }

    pub fn invalid_measurement<T: Into<String>>(msg: T) -> Self {
        BenchReportError::InvalidMeasurement(msg.into())
    }
}
