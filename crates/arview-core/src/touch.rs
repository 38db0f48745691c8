use glam::Vec2;
use smallvec::SmallVec;

/// Screen-space touch coordinates in CSS pixels.
pub type TouchPoint = Vec2;

/// Fingers currently on the surface, in the order the host reports them.
pub type TouchSet = SmallVec<[TouchPoint; 4]>;

#[inline]
pub fn distance(a: TouchPoint, b: TouchPoint) -> f32 {
    a.distance(b)
}

/// Angle of the line from `a` to `b`, in degrees within (-180, 180].
#[inline]
pub fn angle_deg(a: TouchPoint, b: TouchPoint) -> f32 {
    let d = b - a;
    d.y.atan2(d.x).to_degrees()
}

/// Shift `raw` by whole turns so it lies within 180 degrees of `previous`.
///
/// `atan2` jumps by 360 when the finger line crosses the negative x axis;
/// feeding each new reading through this keeps a continuous twist continuous.
#[inline]
pub fn unwrap_angle_deg(previous: f32, raw: f32) -> f32 {
    let mut delta = (raw - previous) % 360.0;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta <= -180.0 {
        delta += 360.0;
    }
    previous + delta
}

/// First two points of a set, if there are at least two.
#[inline]
pub fn first_pair(touches: &[TouchPoint]) -> Option<(TouchPoint, TouchPoint)> {
    match touches {
        [a, b, ..] => Some((*a, *b)),
        _ => None,
    }
}
