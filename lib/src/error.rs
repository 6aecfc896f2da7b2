use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Error opening or decoding a screenshot file
    #[error("Screenshot {path} could not be read")]
    ImageError {
        path: String,
        source: image::error::ImageError,
    },
    /// Error decoding a screenshot from memory
    #[error("Screenshot could not be decoded")]
    DecodeError(#[source] image::error::ImageError),
    #[error("Screenshot could not be recognized")]
    RecognizeFailed(#[from] wordfeud_ocr::Error),
    #[error("Unknown report format {0:?}")]
    UnknownFormat(String),
    #[error("Recognition could not be serialized")]
    Serialize(#[from] serde_json::Error),
}
