/// Tolerance for float error in reported scroll offsets
const EPSILON: f32 = 1.0;

/// Is the zero-height marker after the last tile fully inside the viewport?
///
/// The marker sits at the very bottom of the scrollable content, so "fully
/// visible" reduces to: the bottom edge of the content is at or above the
/// bottom edge of the viewport. Content shorter than the viewport counts as
/// visible, which is what lets the first pages load on a tall window.
pub fn sentinel_visible(offset_y: f32, viewport_height: f32, content_height: f32) -> bool {
    offset_y + viewport_height >= content_height - EPSILON
}
