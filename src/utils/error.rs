use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Notebook is not valid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl ConvertError {
    /// Failures the conversion boundary treats as expected (bad input file,
    /// bad JSON) versus the defensive backstop for everything else.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::IoError(_) | Self::JsonError(_))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
