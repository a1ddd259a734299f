//! Error types for chord translation, dictionary loading and rendering.
//!
//! The translator's public functions never surface [`DegreeError`]; they fall
//! back to echoing their input. The `try_*` variants return it so callers can
//! tell a failed conversion from an unchanged one.

use std::path::PathBuf;

use thiserror::Error;

/// Failure converting between degree and pitch-name notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DegreeError {
    /// The degree chord does not start with a scale degree digit.
    ///
    /// ```
    /// # use chordlib::DegreeError;
    /// let err = DegreeError::Parse("x7".to_string());
    /// assert_eq!(err.to_string(), "Invalid degree chord: x7");
    /// ```
    #[error("Invalid degree chord: {0}")]
    Parse(String),

    /// The key is not one of the 12 sharp-spelled pitch names.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// The chord root is not one of the 12 sharp-spelled pitch names.
    #[error("Unknown root: {0}")]
    UnknownRoot(String),

    /// The chord root does not lie on the key's major scale.
    #[error("Cannot determine the degree of {chord} in key {key}")]
    NonDiatonic { chord: String, key: String },
}

/// Failure loading a chord dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Invalid chord dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read chord dictionary '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure rendering a chord diagram.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No dictionary entry exists for the requested chord name.
    #[error("No chord diagram for '{0}'")]
    MissingChordDefinition(String),

    /// The target container has nothing to draw into.
    #[error("Container has no drawable area ({width}x{height})")]
    EmptyContainer { width: f64, height: f64 },

    #[error("Invalid chord box params: {0}")]
    InvalidParams(#[source] serde_json::Error),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
