use crate::constants::{DRAG_SENSITIVITY, ROTATION_SENSITIVITY};
use crate::touch::{self, TouchPoint};
use crate::transform::Target;
use glam::Vec2;

/// What the fingers on the surface are doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    None,
    SingleDrag,
    DualPinchRotate,
}

impl GestureKind {
    #[inline]
    pub fn classify(touches: &[TouchPoint]) -> Self {
        match touches.len() {
            0 => GestureKind::None,
            1 => GestureKind::SingleDrag,
            _ => GestureKind::DualPinchRotate,
        }
    }
}

/// Reference state captured when a gesture begins.
///
/// Every move is measured against these anchors rather than the previous
/// move, so rounding never accumulates into drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureSession {
    Drag {
        start: TouchPoint,
        reference_position: Vec2,
    },
    PinchRotate {
        reference_distance: f32,
        reference_angle: f32,
        /// Latest finger angle, unwrapped relative to `reference_angle`.
        last_angle: f32,
        reference_scale: f32,
        reference_rotation: f32,
    },
}

impl GestureSession {
    #[inline]
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureSession::Drag { .. } => GestureKind::SingleDrag,
            GestureSession::PinchRotate { .. } => GestureKind::DualPinchRotate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Scene metres moved per screen pixel of drag.
    pub drag_sensitivity: f32,
    /// Fraction of the finger twist applied as yaw.
    pub rotation_sensitivity: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DRAG_SENSITIVITY,
            rotation_sensitivity: ROTATION_SENSITIVITY,
        }
    }
}

/// Turns touch-start/move/end into writes on the [`Target`] store.
///
/// Holds at most one [`GestureSession`]; a change of finger count always
/// replaces it, so a drag can never leak into a pinch or the reverse.
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    pub config: GestureConfig,
    session: Option<GestureSession>,
}

impl GestureClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    #[inline]
    pub fn kind(&self) -> GestureKind {
        self.session
            .as_ref()
            .map_or(GestureKind::None, GestureSession::kind)
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint], target: &Target) {
        self.begin(touches, target);
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint], target: &mut Target) {
        let kind = GestureKind::classify(touches);
        match (&mut self.session, kind) {
            (
                Some(GestureSession::Drag {
                    start,
                    reference_position,
                }),
                GestureKind::SingleDrag,
            ) => {
                let delta = touches[0] - *start;
                target.set_position(*reference_position + delta * self.config.drag_sensitivity);
            }
            (
                Some(GestureSession::PinchRotate {
                    reference_distance,
                    reference_angle,
                    last_angle,
                    reference_scale,
                    reference_rotation,
                }),
                GestureKind::DualPinchRotate,
            ) => {
                let Some((a, b)) = touch::first_pair(touches) else {
                    return;
                };
                let distance = touch::distance(a, b);
                *last_angle = touch::unwrap_angle_deg(*last_angle, touch::angle_deg(a, b));

                if *reference_distance > f32::EPSILON {
                    let ratio = distance / *reference_distance;
                    if ratio.is_finite() {
                        target.set_scale(*reference_scale * ratio);
                    }
                } else if distance > f32::EPSILON {
                    // Fingers started on the same pixel: anchor scale from here on.
                    *reference_distance = distance;
                    *reference_scale = target.get().scale;
                }

                let angle_delta =
                    (*last_angle - *reference_angle) * self.config.rotation_sensitivity;
                target.set_rotation(*reference_rotation + angle_delta);
            }
            _ => {}
        }
    }

    /// `remaining` holds the fingers still down after the lift.
    pub fn touch_end(&mut self, remaining: &[TouchPoint], target: &Target) {
        let was = self.kind();
        self.begin(remaining, target);
        if was != self.kind() {
            log::debug!("[gesture] {:?} -> {:?}", was, self.kind());
        }
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    fn begin(&mut self, touches: &[TouchPoint], target: &Target) {
        let t = target.get();
        self.session = match GestureKind::classify(touches) {
            GestureKind::None => None,
            GestureKind::SingleDrag => Some(GestureSession::Drag {
                start: touches[0],
                reference_position: t.position(),
            }),
            GestureKind::DualPinchRotate => touch::first_pair(touches).map(|(a, b)| {
                let angle = touch::angle_deg(a, b);
                GestureSession::PinchRotate {
                    reference_distance: touch::distance(a, b),
                    reference_angle: angle,
                    last_angle: angle,
                    reference_scale: t.scale,
                    reference_rotation: t.rotation_deg,
                }
            }),
        };
    }
}
