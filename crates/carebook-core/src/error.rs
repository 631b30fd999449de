use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown service type: {0}")]
    UnknownServiceType(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("unknown evaluation type: {0}")]
    UnknownEvaluationType(String),
}
