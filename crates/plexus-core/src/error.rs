//! Error types for plexus.

use thiserror::Error;

/// Error type for network construction and queries.
///
/// Absence is never an error: queries about vertices or edges that are not
/// present return empty results. Only algorithms that must resolve a source or
/// destination vertex report [`Error::InvalidInput`] for unknown vertices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A constructor argument is outside its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Malformed input: an edge without vertices, an unknown vertex.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// An algorithm was asked to start from or reach a vertex the network lacks.
    pub fn vertex_not_found(vert: &impl std::fmt::Debug) -> Self {
        Self::InvalidInput(format!("vertex {vert:?} is not in the network"))
    }

    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for plexus operations.
pub type Result<T> = std::result::Result<T, Error>;
