use thiserror::Error;

#[derive(Error, Debug)]
pub enum TidySarifError {
    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot resolve current directory: {0}")]
    CurrentDir(std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TidySarifError>;
