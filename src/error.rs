use miette::Diagnostic;
use thiserror::Error;

/// Main error type for txtshade operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShadeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(txtshade::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(txtshade::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error with {path}: {message}")]
    #[diagnostic(code(txtshade::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid dimensions: {message}")]
    #[diagnostic(code(txtshade::dimensions))]
    InvalidDimension {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid glyph ramp: {message}")]
    #[diagnostic(code(txtshade::ramp))]
    InvalidRamp {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(txtshade::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ShadeError>;
