//! Rejection reasons for editor gestures.

use thiserror::Error;

use super::session::EditMode;

/// Why a gesture was rejected.
///
/// Every variant is recoverable: the editor state is left exactly as it was
/// and the message is meant to be shown to the operator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Committing with fewer points than a closed area needs
    #[error("A service area needs at least {required} points, currently has {count}")]
    InsufficientPoints {
        /// Current point count
        count: usize,
        /// Minimum point count
        required: usize,
    },

    /// The change would make the area cross itself
    #[error("The service area cannot cross itself")]
    SelfIntersection,

    /// The change would make the area overlap an existing one
    #[error("The service area overlaps an existing service area")]
    AreaOverlap,

    /// Removing a point would leave too few
    #[error("A service area must keep at least {required} points, currently has {count}")]
    MinimumVertexConstraint {
        /// Current point count
        count: usize,
        /// Minimum point count
        required: usize,
    },

    /// Removal requested without a selected point
    #[error("Select a point to remove first")]
    NoVertexSelected,

    /// A gesture referenced a point that does not exist
    #[error("Point {index} does not exist (area has {len} points)")]
    VertexOutOfRange {
        /// Requested index
        index: usize,
        /// Current point count
        len: usize,
    },

    /// The gesture is not available in the current mode
    #[error("Cannot {action} while {mode}")]
    InvalidMode {
        /// The rejected action
        action: &'static str,
        /// The mode the editor was in
        mode: EditMode,
    },
}

impl EditError {
    pub(crate) fn invalid_mode(action: &'static str, mode: EditMode) -> Self {
        Self::InvalidMode { action, mode }
    }
}
