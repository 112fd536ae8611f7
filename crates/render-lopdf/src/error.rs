use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Internal PDF library error: {0}")]
    PdfLibError(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(e: lopdf::Error) -> Self {
        RenderError::PdfLibError(e.to_string())
    }
}
