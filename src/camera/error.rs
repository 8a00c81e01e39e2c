//! Camera error types

use thiserror::Error;

/// Errors reported by the camera and its configuration layer
///
/// Out-of-range zoom or position values are never errors; setters clamp them.
#[derive(Debug, Error)]
pub enum CameraError {
    /// A size or zoom bound was non-positive or not finite
    #[error("invalid {what}: {value}")]
    InvalidArgument { what: &'static str, value: String },

    /// Bounds fitting was asked to cover zero objects
    #[error("cannot fit bounds around an empty set of objects")]
    EmptyInput,

    /// Configuration could not be loaded or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl CameraError {
    pub(crate) fn invalid(what: &'static str, value: impl std::fmt::Debug) -> Self {
        Self::InvalidArgument {
            what,
            value: format!("{value:?}"),
        }
    }
}
