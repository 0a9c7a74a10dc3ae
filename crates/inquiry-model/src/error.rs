use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid inquiry id: {0:?}")]
    InvalidInquiryId(String),
    #[error("unknown field: {0:?}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
