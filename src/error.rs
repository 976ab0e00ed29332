use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("EXIF decode error: {0}")]
    Exif(#[from] exif::Error),

    #[error("Expected {expected} in tag tree, found {found}")]
    UnexpectedFormat {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Deserialization error at path '{path}': {source}")]
    Deserialization {
        path: String,
        source: serde_json::Error,
    },
}

impl From<serde_path_to_error::Error<serde_json::Error>> for MetadataError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        MetadataError::Deserialization {
            path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}
