use arview_core::{TouchPoint, TouchSet};
use web_sys as web;

/// Fingers still on the surface, in client (CSS pixel) coordinates.
///
/// `touches()` rather than `changedTouches()`: on `touchend` this is the set
/// that remains after the lift, which is what the gesture engine expects.
pub fn touch_set(ev: &web::TouchEvent) -> TouchSet {
    let list = ev.touches();
    points_from_client(
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|t| (t.client_x(), t.client_y())),
    )
}

#[inline]
pub fn points_from_client(coords: impl IntoIterator<Item = (i32, i32)>) -> TouchSet {
    coords
        .into_iter()
        .map(|(x, y)| TouchPoint::new(x as f32, y as f32))
        .collect()
}
