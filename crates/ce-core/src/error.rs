use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid upload id: {value:?}")]
    InvalidUploadId { value: String },

    #[error("Unknown equipment type filter: {value:?}")]
    UnknownTypeFilter { value: String },

    #[error("Unknown chart kind: {value:?}")]
    UnknownChartKind { value: String },
}
