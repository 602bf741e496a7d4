use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no x axis field configured")]
    MissingXField,

    #[error("invalid multi chart mode: {value}")]
    InvalidMode { value: String },

    #[error("failed to read field `{field}` of `{file}`: {reason}")]
    RecordAccess {
        file: String,
        field: String,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
