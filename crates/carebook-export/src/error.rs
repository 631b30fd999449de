use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV generation failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
