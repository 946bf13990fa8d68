use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No definitions were supplied")]
    EmptyBatch,

    #[error("The identifier \"{0}\" is used twice")]
    DuplicateIdentifier(String),

    #[error("Field \"{field}\" references the unknown identifier \"{target}\"")]
    UnknownReference { field: String, target: String },

    #[error("The batch cannot be ordered: it contains a lookup cycle or a dangling reference")]
    UnorderableBatch,
}
