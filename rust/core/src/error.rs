// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for room catalog construction.

/// Result type alias for room catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a room catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A boundary ring cannot be evaluated: too few vertices, or a winding
    /// that contradicts its role in the room shape.
    #[error("malformed boundary ring ({vertices} vertices): {reason}")]
    MalformedRing { vertices: usize, reason: String },

    /// A room references a level that the computed level sequence does not contain.
    #[error("level '{level}' is missing from the level sequence")]
    IncompleteLevelMapping { level: String },

    /// A room failed to process; wraps the underlying cause with the room identity.
    #[error("room {element_id} (number '{number}') failed: {source}")]
    Room {
        element_id: i64,
        number: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn malformed_ring(vertices: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRing {
            vertices,
            reason: reason.into(),
        }
    }

    /// Attach the identity of the room being processed.
    pub(crate) fn in_room(self, element_id: i64, number: &str) -> Self {
        Error::Room {
            element_id,
            number: number.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping room context wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Room { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
