//! Drawing/editing session state.

use std::fmt;

use serde::Serialize;

use super::error::EditError;
use crate::constants::MIN_POLYGON_VERTICES;
use crate::geometry::{
    Tolerance, Validity, has_self_intersection, overlaps_any, would_create_self_intersection,
};
use crate::model::{Coordinate, ExistingAreas, Polygon};

/// What the operator is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Showing the committed area
    #[default]
    Idle,
    /// Placing points of a new area
    Drawing,
    /// Moving or removing points of the committed area
    Editing,
}

impl EditMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            EditMode::Idle => "idle",
            EditMode::Drawing => "drawing",
            EditMode::Editing => "editing",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a validity check needs besides the polygon itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationRules {
    /// Snapshot of areas the outline must not overlap.
    pub existing: ExistingAreas,
    pub tolerance: Tolerance,
    /// Also reject appended points that make the area overlap an existing one.
    pub check_overlap_on_append: bool,
}

impl ValidationRules {
    pub fn new(existing: ExistingAreas) -> Self {
        Self {
            existing,
            ..Default::default()
        }
    }

    fn evaluate(&self, polygon: &Polygon) -> Validity {
        Validity::evaluate(polygon, &self.existing, self.tolerance)
    }
}

/// One drawing or editing interaction.
///
/// `working` is a copy, so the committed area stays untouched until the
/// session is committed. Validity is recomputed after every successful
/// mutation and returned to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    mode: EditMode,
    working: Polygon,
    selected_vertex: Option<usize>,
    validity: Validity,
}

impl EditorSession {
    /// A session with nothing in progress.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start drawing, seeded from `committed` when it is already a closed area.
    pub fn drawing(committed: &Polygon, rules: &ValidationRules) -> Self {
        let working = if committed.is_closed_ring() {
            committed.clone()
        } else {
            Polygon::new()
        };
        Self::start(EditMode::Drawing, working, rules)
    }

    /// Start editing a copy of `committed`.
    pub fn editing(committed: &Polygon, rules: &ValidationRules) -> Self {
        Self::start(EditMode::Editing, committed.clone(), rules)
    }

    fn start(mode: EditMode, working: Polygon, rules: &ValidationRules) -> Self {
        let validity = rules.evaluate(&working);
        Self {
            mode,
            working,
            selected_vertex: None,
            validity,
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn working(&self) -> &Polygon {
        &self.working
    }

    pub fn selected_vertex(&self) -> Option<usize> {
        self.selected_vertex
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Recompute the validity flags against (possibly replaced) rules.
    pub fn refresh(&mut self, rules: &ValidationRules) -> Validity {
        self.validity = rules.evaluate(&self.working);
        self.validity
    }

    fn require(&self, mode: EditMode, action: &'static str) -> Result<(), EditError> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(EditError::invalid_mode(action, self.mode))
        }
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.working.len() {
            Ok(())
        } else {
            Err(EditError::VertexOutOfRange {
                index,
                len: self.working.len(),
            })
        }
    }

    /// Append a tapped point while drawing.
    ///
    /// Once two points exist, the point is rejected if its new edges would
    /// cross the existing outline.
    pub fn append_point(
        &mut self,
        point: Coordinate,
        rules: &ValidationRules,
    ) -> Result<Validity, EditError> {
        self.require(EditMode::Drawing, "add a point")?;

        let mut candidate = self.working.clone();
        candidate.push(point);

        if self.working.len() >= 2 && would_create_self_intersection(&candidate, rules.tolerance) {
            return Err(EditError::SelfIntersection);
        }
        if rules.check_overlap_on_append
            && candidate.is_closed_ring()
            && overlaps_any(&candidate, &rules.existing, rules.tolerance)
        {
            return Err(EditError::AreaOverlap);
        }

        self.working = candidate;
        Ok(self.refresh(rules))
    }

    /// Drop the most recently drawn point. Does nothing on an empty outline.
    pub fn undo_last_point(&mut self, rules: &ValidationRules) -> Result<Validity, EditError> {
        self.require(EditMode::Drawing, "undo")?;
        if self.working.pop().is_some() {
            self.refresh(rules);
        }
        Ok(self.validity)
    }

    /// Toggle the selection of a vertex marker.
    pub fn select_vertex(&mut self, index: usize) -> Result<Validity, EditError> {
        self.require(EditMode::Editing, "select a point")?;
        self.check_index(index)?;

        self.selected_vertex = if self.selected_vertex == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.validity)
    }

    /// Move a vertex to where its marker was dropped.
    ///
    /// The whole outline is re-validated; if the move makes it cross itself
    /// or overlap an existing area, the vertex snaps back.
    pub fn move_vertex(
        &mut self,
        index: usize,
        point: Coordinate,
        rules: &ValidationRules,
    ) -> Result<Validity, EditError> {
        self.require(EditMode::Editing, "move a point")?;
        self.check_index(index)?;

        let mut candidate = self.working.clone();
        candidate.replace(index, point);

        if has_self_intersection(&candidate, rules.tolerance) {
            return Err(EditError::SelfIntersection);
        }
        if overlaps_any(&candidate, &rules.existing, rules.tolerance) {
            return Err(EditError::AreaOverlap);
        }

        self.working = candidate;
        Ok(self.refresh(rules))
    }

    /// Remove the selected vertex, keeping at least [`MIN_POLYGON_VERTICES`].
    pub fn remove_selected_vertex(
        &mut self,
        rules: &ValidationRules,
    ) -> Result<Validity, EditError> {
        self.require(EditMode::Editing, "remove a point")?;

        let count = self.working.len();
        if count <= MIN_POLYGON_VERTICES {
            return Err(EditError::MinimumVertexConstraint {
                count,
                required: MIN_POLYGON_VERTICES,
            });
        }
        let index = self.selected_vertex.ok_or(EditError::NoVertexSelected)?;
        self.check_index(index)?;

        self.working.remove(index);
        self.selected_vertex = None;
        Ok(self.refresh(rules))
    }

    /// Check that the working outline may be committed.
    pub fn ensure_committable(&self) -> Result<(), EditError> {
        let count = self.working.len();
        if count < MIN_POLYGON_VERTICES {
            return Err(EditError::InsufficientPoints {
                count,
                required: MIN_POLYGON_VERTICES,
            });
        }
        if self.validity.is_self_intersecting {
            return Err(EditError::SelfIntersection);
        }
        if self.validity.has_overlap {
            return Err(EditError::AreaOverlap);
        }
        Ok(())
    }

    /// Consume the session, yielding the working outline.
    pub fn into_working(self) -> Polygon {
        self.working
    }
}
