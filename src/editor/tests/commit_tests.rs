//! Tests for committing drawn and edited areas.

use super::{c, draw, recording_editor, square};
use crate::constants::MIN_POLYGON_VERTICES;
use crate::editor::{EditError, EditMode, EditorMessage, EditorProps};
use crate::model::Polygon;

#[test]
fn test_complete_triangle() {
    let (mut editor, recorded) = recording_editor(EditorProps::default());
    let triangle = Polygon::from_vertices(vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 0.5)]);
    draw(&mut editor, &triangle);

    editor.update(EditorMessage::Complete).unwrap();

    assert_eq!(editor.mode(), EditMode::Idle);
    assert_eq!(editor.committed(), &triangle);
    let recorded = recorded.borrow();
    assert_eq!(recorded.completed.len(), 1);
    assert_eq!(recorded.completed[0].coordinates, triangle.vertices());
    assert_eq!(recorded.changed, recorded.completed);
}

#[test]
fn test_complete_with_two_points_is_blocked() {
    let (mut editor, recorded) = recording_editor(EditorProps::default());
    editor.update(EditorMessage::StartDrawing).unwrap();
    editor.update(EditorMessage::MapTap(c(0.0, 0.0))).unwrap();
    editor.update(EditorMessage::MapTap(c(1.0, 1.0))).unwrap();

    let result = editor.update(EditorMessage::Complete);
    assert_eq!(
        result,
        Err(EditError::InsufficientPoints {
            count: 2,
            required: MIN_POLYGON_VERTICES,
        })
    );
    assert_eq!(editor.mode(), EditMode::Drawing);
    assert!(editor.committed().is_empty());
    assert!(recorded.borrow().completed.is_empty());
    assert!(recorded.borrow().changed.is_empty());
}

#[test]
fn test_complete_with_overlap_is_blocked() {
    let (mut editor, recorded) =
        recording_editor(EditorProps::new(vec![square(0.0, 0.0, 1.0)]));
    draw(&mut editor, &square(0.5, 0.5, 1.0));

    let result = editor.update(EditorMessage::Complete);
    assert_eq!(result, Err(EditError::AreaOverlap));
    assert_eq!(editor.mode(), EditMode::Drawing);
    assert!(recorded.borrow().completed.is_empty());
}

#[test]
fn test_complete_while_idle_is_rejected() {
    let (mut editor, recorded) = recording_editor(EditorProps::default());
    let result = editor.update(EditorMessage::Complete);
    assert!(matches!(result, Err(EditError::InvalidMode { .. })));
    assert!(recorded.borrow().completed.is_empty());
}

#[test]
fn test_commit_then_edit_roundtrip() {
    let (mut editor, _recorded) = recording_editor(EditorProps::default());
    let area = Polygon::from_vertices(vec![
        c(52.52, 13.40),
        c(52.52, 13.42),
        c(52.54, 13.43),
        c(52.55, 13.41),
        c(52.53, 13.39),
    ]);
    draw(&mut editor, &area);
    editor.update(EditorMessage::Complete).unwrap();

    editor.update(EditorMessage::StartEditing).unwrap();
    assert_eq!(editor.mode(), EditMode::Editing);
    assert_eq!(editor.session().working(), &area);
    assert_eq!(editor.session().working().vertices(), area.vertices());
}

#[test]
fn test_save_changes_commits_edit() {
    let area = square(0.0, 0.0, 1.0);
    let (mut editor, recorded) =
        recording_editor(EditorProps::default().with_initial_area(area));

    editor.update(EditorMessage::StartEditing).unwrap();
    editor
        .update(EditorMessage::VertexDragEnd(2, c(1.5, 1.5)))
        .unwrap();
    editor.update(EditorMessage::SaveChanges).unwrap();

    assert_eq!(editor.mode(), EditMode::Idle);
    assert_eq!(editor.committed().get(2), Some(c(1.5, 1.5)));
    let recorded = recorded.borrow();
    assert_eq!(recorded.completed.len(), 1);
    assert_eq!(recorded.changed.len(), 1);
    assert_eq!(recorded.completed[0].coordinates[2], c(1.5, 1.5));
}

#[test]
fn test_save_changes_requires_editing_mode() {
    let (mut editor, _recorded) = recording_editor(EditorProps::default());
    draw(&mut editor, &square(0.0, 0.0, 1.0));

    let result = editor.update(EditorMessage::SaveChanges);
    assert!(matches!(
        result,
        Err(EditError::InvalidMode {
            mode: EditMode::Drawing,
            ..
        })
    ));
}

#[test]
fn test_replacing_existing_areas_revalidates_session() {
    let (mut editor, recorded) = recording_editor(EditorProps::default());
    draw(&mut editor, &square(0.0, 0.0, 1.0));
    assert!(editor.validity().is_clear());

    let validity = editor.replace_existing_areas(vec![square(0.5, 0.5, 1.0)]);
    assert!(validity.has_overlap);
    assert_eq!(editor.snapshot_version(), 1);
    assert_eq!(
        editor.update(EditorMessage::Complete),
        Err(EditError::AreaOverlap)
    );

    editor.replace_existing_areas(Vec::new());
    editor.update(EditorMessage::Complete).unwrap();
    assert_eq!(recorded.borrow().completed.len(), 1);
}

#[test]
fn test_commit_without_callbacks() {
    let mut editor = crate::editor::PolygonEditor::new(EditorProps::default());
    draw(&mut editor, &square(0.0, 0.0, 1.0));
    editor.update(EditorMessage::Complete).unwrap();
    assert_eq!(editor.committed().len(), 4);
}
