use crate::constants::{CHANGE_THRESHOLD, SMOOTHING_FACTOR};
use crate::surface::{RenderSurface, SurfaceError};
use crate::transform::{Current, Target};
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasingConfig {
    /// Fraction of the remaining gap closed each frame, in (0, 1).
    pub smoothing_factor: f32,
    /// Per-axis change below which nothing is committed or written.
    pub change_threshold: f32,
}

impl Default for EasingConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SMOOTHING_FACTOR,
            change_threshold: CHANGE_THRESHOLD,
        }
    }
}

/// Which surface mutations one tick issued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub scale: bool,
    pub rotation: bool,
    pub position: bool,
}

impl TickReport {
    #[inline]
    pub fn any(&self) -> bool {
        self.scale || self.rotation || self.position
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Advances [`Current`] toward [`Target`] once per frame.
///
/// An axis is only committed to `Current`, and only written to the surface,
/// when its step exceeds the change threshold. Near-zero transform writes
/// make some renderers drop the model to black, so a converged axis must
/// stay silent.
#[derive(Clone, Debug, Default)]
pub struct EasingLoop {
    pub config: EasingConfig,
    camera_target_gap_logged: bool,
}

impl EasingLoop {
    pub fn new(config: EasingConfig) -> Self {
        Self {
            config,
            camera_target_gap_logged: false,
        }
    }

    pub fn tick<S: RenderSurface + ?Sized>(
        &mut self,
        target: &Target,
        current: &mut Current,
        surface: &mut S,
    ) -> TickReport {
        let goal = *target.get();
        let cur = current.state_mut();
        let mut report = TickReport::default();

        if let Some(s) = self.step(cur.scale, goal.scale) {
            cur.scale = s;
            surface.set_scale(Vec3::splat(s));
            report.scale = true;
        }
        if let Some(r) = self.step(cur.rotation_deg, goal.rotation_deg) {
            cur.rotation_deg = r;
            surface.set_orientation(yaw_orientation(r));
            report.rotation = true;
        }

        let x = self.step(cur.position_x, goal.position_x);
        let z = self.step(cur.position_z, goal.position_z);
        if x.is_some() || z.is_some() {
            cur.position_x = x.unwrap_or(cur.position_x);
            cur.position_z = z.unwrap_or(cur.position_z);
            let pos = Vec2::new(cur.position_x, cur.position_z);
            self.write_position(surface, pos);
            report.position = true;
        }
        report
    }

    /// Camera-target write that tolerates surfaces without the capability.
    /// Position keeps tracking in `Current` either way.
    pub(crate) fn write_position<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, pos: Vec2) {
        match surface.set_camera_target(Vec3::new(pos.x, 0.0, pos.y)) {
            Ok(()) => {}
            Err(SurfaceError::Unsupported(what)) => {
                if !self.camera_target_gap_logged {
                    self.camera_target_gap_logged = true;
                    log::warn!("[ease] surface lacks {}; position tracked but not shown", what);
                }
            }
            Err(e) => log::debug!("[ease] {}", e),
        }
    }

    #[inline]
    fn step(&self, current: f32, target: f32) -> Option<f32> {
        let next = lerp(current, target, self.config.smoothing_factor);
        ((next - current).abs() > self.config.change_threshold).then_some(next)
    }
}

/// Yaw-only orientation in the surface's `(roll, pitch, yaw)` order.
#[inline]
pub fn yaw_orientation(rotation_deg: f32) -> Vec3 {
    Vec3::new(0.0, 0.0, rotation_deg)
}
