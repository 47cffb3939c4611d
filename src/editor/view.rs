//! Render-ready snapshot of the editor.
//!
//! Map rendering is the host's job; this module only gathers what a renderer
//! needs to draw existing areas, the outline, vertex markers and the action
//! buttons.

use serde::Serialize;

use super::{EditMode, PolygonEditor};
use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::Validity;
use crate::model::{Coordinate, MapRegion, Polygon};

/// A vertex marker on the outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VertexMarker {
    pub index: usize,
    pub coordinate: Coordinate,
    pub selected: bool,
    /// Markers can only be dragged while editing.
    pub draggable: bool,
}

/// Which action buttons are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionState {
    pub can_start_drawing: bool,
    pub can_start_editing: bool,
    pub can_undo: bool,
    pub can_complete: bool,
    pub can_remove_vertex: bool,
    pub can_save: bool,
    pub can_cancel: bool,
}

/// Snapshot of everything the map needs to draw.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView<'a> {
    pub mode: EditMode,
    pub label: Option<&'a str>,
    /// Error supplied by the host form.
    pub error: Option<&'a str>,
    /// Message of the last rejected gesture.
    pub alert: Option<String>,
    pub region: MapRegion,
    pub existing_areas: &'a [Polygon],
    /// The outline to draw: the working polygon while a session is active,
    /// otherwise the committed area.
    pub outline: &'a Polygon,
    pub markers: Vec<VertexMarker>,
    pub validity: Validity,
    pub actions: ActionState,
}

impl<'a> EditorView<'a> {
    pub(super) fn new(editor: &'a PolygonEditor) -> Self {
        let session = &editor.session;
        let mode = session.mode();
        let validity = session.validity();

        let outline = match mode {
            EditMode::Idle => &editor.committed,
            EditMode::Drawing | EditMode::Editing => session.working(),
        };

        let markers = match mode {
            EditMode::Idle => Vec::new(),
            EditMode::Drawing | EditMode::Editing => outline
                .vertices()
                .iter()
                .enumerate()
                .map(|(index, coordinate)| VertexMarker {
                    index,
                    coordinate: *coordinate,
                    selected: session.selected_vertex() == Some(index),
                    draggable: mode == EditMode::Editing,
                })
                .collect(),
        };

        let committable = outline.len() >= MIN_POLYGON_VERTICES && validity.is_clear();
        let actions = ActionState {
            can_start_drawing: mode == EditMode::Idle,
            can_start_editing: mode == EditMode::Idle && editor.committed.is_closed_ring(),
            can_undo: mode == EditMode::Drawing && !outline.is_empty(),
            can_complete: mode == EditMode::Drawing && committable,
            can_remove_vertex: mode == EditMode::Editing
                && session.selected_vertex().is_some()
                && outline.len() > MIN_POLYGON_VERTICES,
            can_save: mode == EditMode::Editing && committable,
            can_cancel: mode != EditMode::Idle,
        };

        Self {
            mode,
            label: editor.label.as_deref(),
            error: editor.external_error.as_deref(),
            alert: editor.alert.as_ref().map(ToString::to_string),
            region: editor.region,
            existing_areas: editor.rules.existing.as_slice(),
            outline,
            markers,
            validity,
            actions,
        }
    }
}
