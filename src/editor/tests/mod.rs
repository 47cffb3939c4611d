//! Unit tests for the service-area editor.
//!
//! Shared fixtures live here; each submodule covers one part of the
//! state machine.

mod commit_tests;

use std::cell::RefCell;
use std::rc::Rc;

use crate::editor::{EditorMessage, EditorProps, PolygonEditor};
use crate::model::{AreaPayload, Coordinate, Polygon};

fn c(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude)
}

fn square(lat: f64, lng: f64, size: f64) -> Polygon {
    Polygon::from_vertices(vec![
        c(lat, lng),
        c(lat, lng + size),
        c(lat + size, lng + size),
        c(lat + size, lng),
    ])
}

/// Payloads received by the commit callbacks.
#[derive(Default)]
struct Recorded {
    completed: Vec<AreaPayload>,
    changed: Vec<AreaPayload>,
}

/// Editor with both callbacks wired to a shared recorder.
fn recording_editor(props: EditorProps) -> (PolygonEditor, Rc<RefCell<Recorded>>) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let on_complete = Rc::clone(&recorded);
    let on_change = Rc::clone(&recorded);
    let editor = PolygonEditor::new(props)
        .on_area_complete(move |payload| on_complete.borrow_mut().completed.push(payload.clone()))
        .on_change(move |payload| on_change.borrow_mut().changed.push(payload.clone()));
    (editor, recorded)
}

/// Start drawing and tap every vertex of `polygon`, asserting each is accepted.
fn draw(editor: &mut PolygonEditor, polygon: &Polygon) {
    editor
        .update(EditorMessage::StartDrawing)
        .expect("Failed to start drawing");
    for p in polygon.vertices() {
        editor
            .update(EditorMessage::MapTap(*p))
            .expect("Point should be accepted");
    }
}
