//! Editor message types.
//!
//! Host gestures (map taps, marker drags, action buttons) are represented as
//! messages in the Elm architecture style and applied with
//! [`PolygonEditor::update`](super::PolygonEditor::update).

use crate::model::Coordinate;

/// Gestures the editor responds to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorMessage {
    // Drawing
    /// "Start Drawing" pressed
    StartDrawing,
    /// Map tapped at a coordinate
    MapTap(Coordinate),
    /// "Undo" pressed: drop the last drawn point
    UndoLastPoint,
    /// "Complete" pressed: commit the drawn area
    Complete,

    // Editing
    /// "Edit" pressed
    StartEditing,
    /// Vertex marker tapped
    SelectVertex(usize),
    /// Vertex marker released after a drag
    VertexDragEnd(usize, Coordinate),
    /// "Remove Point" pressed
    RemoveSelectedVertex,
    /// "Save Changes" pressed: commit the edited area
    SaveChanges,

    /// "Cancel" pressed in either mode
    Cancel,
}

impl EditorMessage {
    /// Short action name used in logs and mode errors.
    pub fn action(&self) -> &'static str {
        match self {
            EditorMessage::StartDrawing => "start drawing",
            EditorMessage::MapTap(_) => "add a point",
            EditorMessage::UndoLastPoint => "undo",
            EditorMessage::Complete => "complete",
            EditorMessage::StartEditing => "edit",
            EditorMessage::SelectVertex(_) => "select a point",
            EditorMessage::VertexDragEnd(..) => "move a point",
            EditorMessage::RemoveSelectedVertex => "remove a point",
            EditorMessage::SaveChanges => "save changes",
            EditorMessage::Cancel => "cancel",
        }
    }
}
