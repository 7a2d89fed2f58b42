use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid form JSON: {0}")]
    Json(#[from] serde_json::Error),
}
