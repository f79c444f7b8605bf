//! Pointer and keyboard input handling

/// Map a pointer `clientY` to a field y coordinate
///
/// `rect_top`/`rect_height` are the canvas bounding rect in CSS pixels. A
/// canvas scaled by CSS still maps its full height onto the field.
pub fn pointer_to_field_y(client_y: f32, rect_top: f32, rect_height: f32, field_height: f32) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        local * field_height / rect_height
    } else {
        local
    }
}

/// Handle key down event
pub fn handle_key_down(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" => -1,
        "ArrowDown" | "s" | "S" => 1,
        _ => current_dir,
    }
}

/// Handle key up event
///
/// Releasing a key only stops the paddle if it was the one driving it, so
/// rolling from one key to the other keeps moving.
pub fn handle_key_up(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" if current_dir < 0 => 0,
        "ArrowDown" | "s" | "S" if current_dir > 0 => 0,
        _ => current_dir,
    }
}
