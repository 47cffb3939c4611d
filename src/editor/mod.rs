//! Interactive service-area editor.
//!
//! [`PolygonEditor`] owns the committed area and the current
//! [`EditorSession`]. Hosts translate taps, marker drags and button presses
//! into [`EditorMessage`]s and feed them to [`PolygonEditor::update`], which
//! returns the fresh validity flags or the reason the gesture was rejected.
//!
//! The editor performs no I/O. Committing only calls the registered
//! callbacks; persisting the area is up to the caller.

mod error;
mod message;
mod session;
mod view;

#[cfg(test)]
mod tests;

pub use error::EditError;
pub use message::EditorMessage;
pub use session::{EditMode, EditorSession, ValidationRules};
pub use view::{ActionState, EditorView, VertexMarker};

use std::fmt;

use crate::config::EditorConfig;
use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::{Tolerance, Validity};
use crate::model::{AreaPayload, Coordinate, ExistingAreas, MapRegion, Polygon};

/// Callback invoked with the committed area.
pub type AreaCallback = Box<dyn FnMut(&AreaPayload)>;

/// Inputs supplied by the host when the editor is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorProps {
    /// Areas the new area must not overlap.
    pub existing_areas: ExistingAreas,
    /// Area to preload as committed.
    pub initial_area: Option<Polygon>,
    /// Map viewport; derived from the initial area when absent.
    pub initial_region: Option<MapRegion>,
    /// Field label.
    pub label: Option<String>,
    /// Externally supplied validation error to display.
    pub error: Option<String>,
}

impl EditorProps {
    pub fn new(existing_areas: impl Into<ExistingAreas>) -> Self {
        Self {
            existing_areas: existing_areas.into(),
            ..Default::default()
        }
    }

    pub fn with_initial_area(mut self, area: impl Into<Polygon>) -> Self {
        self.initial_area = Some(area.into());
        self
    }

    pub fn with_initial_region(mut self, region: MapRegion) -> Self {
        self.initial_region = Some(region);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// The service-area editor.
pub struct PolygonEditor {
    rules: ValidationRules,
    /// Bumped whenever the host replaces the existing-area snapshot.
    snapshot_version: u64,
    committed: Polygon,
    session: EditorSession,
    region: MapRegion,
    label: Option<String>,
    external_error: Option<String>,
    /// Last rejected gesture, cleared by the next successful one.
    alert: Option<EditError>,
    on_area_complete: Option<AreaCallback>,
    on_change: Option<AreaCallback>,
}

impl PolygonEditor {
    /// Create an editor from host props with default settings.
    pub fn new(props: EditorProps) -> Self {
        let committed = props.initial_area.unwrap_or_default();
        let region = props
            .initial_region
            .or_else(|| MapRegion::fit(&committed))
            .unwrap_or_default();

        Self {
            rules: ValidationRules::new(props.existing_areas),
            snapshot_version: 0,
            committed,
            session: EditorSession::idle(),
            region,
            label: props.label,
            external_error: props.error,
            alert: None,
            on_area_complete: None,
            on_change: None,
        }
    }

    /// Apply validation settings from a configuration.
    pub fn with_config(mut self, config: &EditorConfig) -> Self {
        self.rules.tolerance = config.tolerance();
        self.rules.check_overlap_on_append = config.editor.check_overlap_on_append;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.rules.tolerance = tolerance;
        self
    }

    pub fn with_overlap_check_on_append(mut self, enabled: bool) -> Self {
        self.rules.check_overlap_on_append = enabled;
        self
    }

    /// Register the callback run when an area is committed.
    pub fn on_area_complete(mut self, callback: impl FnMut(&AreaPayload) + 'static) -> Self {
        self.on_area_complete = Some(Box::new(callback));
        self
    }

    /// Register the form-field change callback, run after `on_area_complete`.
    pub fn on_change(mut self, callback: impl FnMut(&AreaPayload) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn mode(&self) -> EditMode {
        self.session.mode()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// The last committed area.
    pub fn committed(&self) -> &Polygon {
        &self.committed
    }

    pub fn existing_areas(&self) -> &ExistingAreas {
        &self.rules.existing
    }

    pub fn tolerance(&self) -> Tolerance {
        self.rules.tolerance
    }

    pub fn snapshot_version(&self) -> u64 {
        self.snapshot_version
    }

    pub fn validity(&self) -> Validity {
        self.session.validity()
    }

    /// The last rejected gesture, if it has not been superseded.
    pub fn alert(&self) -> Option<&EditError> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Replace the externally supplied error message.
    pub fn set_external_error(&mut self, error: Option<String>) {
        self.external_error = error;
    }

    /// Swap in a new snapshot of existing areas.
    ///
    /// The in-progress session is re-validated against the new snapshot.
    pub fn replace_existing_areas(&mut self, areas: impl Into<ExistingAreas>) -> Validity {
        self.rules.existing = areas.into();
        self.snapshot_version += 1;
        log::debug!(
            "Existing areas replaced: {} areas (version {})",
            self.rules.existing.len(),
            self.snapshot_version
        );
        self.session.refresh(&self.rules)
    }

    /// Apply a host gesture.
    ///
    /// On rejection the state is unchanged and the error is kept as the
    /// current alert.
    pub fn update(&mut self, message: EditorMessage) -> Result<Validity, EditError> {
        let result = self.apply(message);
        match &result {
            Ok(_) => self.alert = None,
            Err(e) => {
                log::warn!("Rejected '{}': {}", message.action(), e);
                self.alert = Some(e.clone());
            }
        }
        result
    }

    fn apply(&mut self, message: EditorMessage) -> Result<Validity, EditError> {
        match message {
            EditorMessage::StartDrawing => {
                self.require_idle(message)?;
                self.session = EditorSession::drawing(&self.committed, &self.rules);
                log::debug!(
                    "Drawing started with {} seeded points",
                    self.session.working().len()
                );
                Ok(self.session.validity())
            }
            EditorMessage::MapTap(point) => self.tap(point),
            EditorMessage::UndoLastPoint => self.session.undo_last_point(&self.rules),
            EditorMessage::StartEditing => {
                self.require_idle(message)?;
                if !self.committed.is_closed_ring() {
                    return Err(EditError::InsufficientPoints {
                        count: self.committed.len(),
                        required: MIN_POLYGON_VERTICES,
                    });
                }
                self.session = EditorSession::editing(&self.committed, &self.rules);
                log::debug!("Editing started with {} points", self.committed.len());
                Ok(self.session.validity())
            }
            EditorMessage::SelectVertex(index) => {
                let validity = self.session.select_vertex(index)?;
                log::debug!("Selected point: {:?}", self.session.selected_vertex());
                Ok(validity)
            }
            EditorMessage::VertexDragEnd(index, point) => {
                let validity = self.session.move_vertex(index, point, &self.rules)?;
                log::debug!(
                    "Moved point {} to ({:.6}, {:.6})",
                    index,
                    point.latitude,
                    point.longitude
                );
                Ok(validity)
            }
            EditorMessage::RemoveSelectedVertex => {
                let validity = self.session.remove_selected_vertex(&self.rules)?;
                log::debug!("Removed point, {} remain", self.session.working().len());
                Ok(validity)
            }
            EditorMessage::Complete => self.commit(message, EditMode::Drawing),
            EditorMessage::SaveChanges => self.commit(message, EditMode::Editing),
            EditorMessage::Cancel => {
                if self.session.mode() != EditMode::Idle {
                    log::debug!("Cancelled {}, reverting to committed area", self.session.mode());
                    self.session = EditorSession::idle();
                }
                Ok(self.session.validity())
            }
        }
    }

    fn require_idle(&self, message: EditorMessage) -> Result<(), EditError> {
        match self.session.mode() {
            EditMode::Idle => Ok(()),
            mode => Err(EditError::invalid_mode(message.action(), mode)),
        }
    }

    fn tap(&mut self, point: Coordinate) -> Result<Validity, EditError> {
        let validity = self.session.append_point(point, &self.rules)?;
        log::debug!(
            "Added point at ({:.6}, {:.6}), total: {}",
            point.latitude,
            point.longitude,
            self.session.working().len()
        );
        Ok(validity)
    }

    fn commit(&mut self, message: EditorMessage, mode: EditMode) -> Result<Validity, EditError> {
        if self.session.mode() != mode {
            return Err(EditError::invalid_mode(message.action(), self.session.mode()));
        }
        self.session.ensure_committable()?;

        let session = std::mem::take(&mut self.session);
        self.committed = session.into_working();

        let payload = AreaPayload::from(&self.committed);
        if let Some(callback) = self.on_area_complete.as_mut() {
            callback(&payload);
        }
        if let Some(callback) = self.on_change.as_mut() {
            callback(&payload);
        }

        log::info!(
            "Service area committed with {} points",
            self.committed.len()
        );
        Ok(self.session.validity())
    }

    /// Build a render-ready snapshot of the editor.
    pub fn view(&self) -> EditorView<'_> {
        EditorView::new(self)
    }
}

impl fmt::Debug for PolygonEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolygonEditor")
            .field("mode", &self.session.mode())
            .field("committed", &self.committed)
            .field("working", self.session.working())
            .field("existing_areas", &self.rules.existing.len())
            .field("snapshot_version", &self.snapshot_version)
            .field("alert", &self.alert)
            .finish_non_exhaustive()
    }
}
