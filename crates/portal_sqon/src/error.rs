use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqonError {
    #[error("sqon is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a '{param}=' query parameter, found '{found}'")]
    UnexpectedParam { param: &'static str, found: String },
}

pub type Result<T> = std::result::Result<T, SqonError>;
