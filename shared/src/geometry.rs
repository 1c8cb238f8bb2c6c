//! Angle bookkeeping for the wheel.
//!
//! Angles are in degrees, screen convention (y grows downward, positive is
//! clockwise). Slice 0 starts at the top (-90°) and slices are laid out
//! clockwise. The pointer never moves; it sits at [`POINTER_ANGLE`].

use crate::constants::{FULL_ROTATION, POINTER_ANGLE};

/// Reduce any angle into `[0, 360)`.
pub fn normalize(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(FULL_ROTATION);
    // rem_euclid rounds tiny negatives up to exactly 360
    if reduced >= FULL_ROTATION {
        0.0
    } else {
        reduced
    }
}

pub fn slice_width(slice_count: usize) -> f64 {
    debug_assert!(slice_count > 0);
    FULL_ROTATION / slice_count as f64
}

/// Start and end angle of a slice in the un-rotated wheel frame.
pub fn slice_span(index: usize, slice_count: usize) -> (f64, f64) {
    let width = slice_width(slice_count);
    let start = POINTER_ANGLE + index as f64 * width;
    (start, start + width)
}

pub fn slice_center(index: usize, slice_count: usize) -> f64 {
    let width = slice_width(slice_count);
    POINTER_ANGLE + index as f64 * width + width / 2.0
}

/// Rotation that brings the center of slice `index` under the pointer.
///
/// Solves `center(index) + R ≡ -90 (mod 360)`, which gives
/// `R = -index * width - width / 2`, returned in `[0, 360)`.
pub fn angle_for_index(index: usize, slice_count: usize) -> f64 {
    let width = slice_width(slice_count);
    normalize(-(index as f64) * width - width / 2.0)
}

/// Slice sitting under the pointer once the wheel is rotated by `rotation`.
pub fn slice_at_pointer(rotation: f64, slice_count: usize) -> usize {
    // Pointer position in the wheel frame, measured from where slice 0 starts.
    let offset = normalize(-rotation);
    let index = (offset / slice_width(slice_count)).floor() as usize;
    index.min(slice_count - 1)
}
