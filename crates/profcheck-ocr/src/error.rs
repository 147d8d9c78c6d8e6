use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("image payload is empty")]
    EmptyImage,

    #[error("failed to start OCR engine {bin}: {source}")]
    Spawn {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error talking to OCR engine: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR engine exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("OCR timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("OCR output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
