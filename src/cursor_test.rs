#![allow(clippy::float_cmp)]

use super::*;

fn sample(x: f64, y: f64) -> CursorRecord {
    CursorRecord { timestamp: 0.0, x, y }
}

fn locked_camera() -> Camera {
    // Scenario-1 lock: 1000x500 view box fitted into 800x400.
    Camera { x: 0.0, y: 0.0, zoom: 0.8 }
}

fn fitted() -> FittedSize {
    FittedSize { width: 800.0, height: 400.0 }
}

#[test]
fn cursor_maps_through_the_camera() {
    let display = cursor_position(sample(500.0, 250.0), locked_camera(), fitted()).unwrap();
    assert_eq!(display.x, 400.0);
    assert_eq!(display.y, 200.0);
}

#[test]
fn cursor_hidden_sample_is_none() {
    assert!(cursor_position(sample(-1.0, -1.0), locked_camera(), fitted()).is_none());
}

#[test]
fn cursor_with_one_negative_coordinate_is_none() {
    assert!(cursor_position(sample(-1.0, 100.0), locked_camera(), fitted()).is_none());
    assert!(cursor_position(sample(100.0, -1.0), locked_camera(), fitted()).is_none());
}

#[test]
fn cursor_outside_fitted_area_is_none() {
    // Board x 1100 maps to display 880, past the 800px fitted width.
    assert!(cursor_position(sample(1100.0, 250.0), locked_camera(), fitted()).is_none());
}

#[test]
fn cursor_on_fitted_edge_is_drawn() {
    let display = cursor_position(sample(1000.0, 500.0), locked_camera(), fitted()).unwrap();
    assert_eq!(display.x, 800.0);
    assert_eq!(display.y, 400.0);
}

#[test]
fn cursor_left_of_offset_view_box_is_none() {
    // Camera anchored at board x=200: board 100 maps to negative display x.
    let camera = Camera { x: 200.0, y: 0.0, zoom: 0.8 };
    assert!(cursor_position(sample(100.0, 250.0), camera, fitted()).is_none());
}
