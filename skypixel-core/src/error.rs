use std::path::PathBuf;

use thiserror::Error;

/// Errors from the image reveal pipeline.
#[derive(Debug, Error)]
pub enum RevealError {
    /// The encoded array file does not exist.
    #[error("encoded array file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file holds a different number of elements than the target grid.
    #[error("cannot reshape {actual} elements into a {side}x{side} grid ({expected} expected)")]
    ShapeMismatch { side: usize, expected: usize, actual: usize },

    /// The file is not a readable NPY array.
    #[error("failed to read NPY array: {0}")]
    Npy(#[from] ndarray_npy::ReadNpyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the weather lookup pipeline.
///
/// Network, decode and missing-field failures are kept apart so callers can
/// tell them from each other instead of one collapsed message string.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The API rejected the request with status 400, usually an unknown city.
    #[error("Invalid city or bad request.")]
    InvalidCity,

    /// Any other non-success HTTP status.
    #[error("request failed with status {status}: {detail}")]
    Http { status: reqwest::StatusCode, detail: String },

    /// Transport-level failure (connect, timeout), after the single retry.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON shape (includes missing keys).
    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No API key could be resolved from flag, environment or config file.
    #[error(
        "no API key configured.\n\
         Hint: pass --key, set the WEATHERAPI_KEY environment variable,\n\
         or add `api_key = \"...\"` to {config_path}."
    )]
    MissingApiKey { config_path: String },
}
