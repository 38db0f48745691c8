use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("render surface does not support {0}")]
    Unsupported(&'static str),
    #[error("render surface rejected {what}: {reason}")]
    Rejected { what: &'static str, reason: String },
}

/// Whatever draws the model. Opaque to the engine beyond these mutations.
///
/// Scale and orientation writes are fire-and-forget. Camera-target support
/// is optional: the default implementation reports
/// [`SurfaceError::Unsupported`] and callers treat that as a no-op.
pub trait RenderSurface {
    /// Per-axis scale factors.
    fn set_scale(&mut self, scale: Vec3);

    /// Orientation in degrees as `(roll, pitch, yaw)`.
    fn set_orientation(&mut self, orientation_deg: Vec3);

    /// Point the camera orbits around, in scene metres.
    fn set_camera_target(&mut self, _target: Vec3) -> Result<(), SurfaceError> {
        Err(SurfaceError::Unsupported("camera-target"))
    }

    /// Return the orbit camera to its automatic framing.
    fn reset_view(&mut self) {}

    fn set_auto_rotate(&mut self, _enabled: bool) {}
}

// Attribute encodings understood by <model-viewer>.

#[inline]
pub fn scale_attr(scale: Vec3) -> String {
    format!("{} {} {}", scale.x, scale.y, scale.z)
}

#[inline]
pub fn orientation_attr(orientation_deg: Vec3) -> String {
    format!(
        "{}deg {}deg {}deg",
        orientation_deg.x, orientation_deg.y, orientation_deg.z
    )
}

#[inline]
pub fn camera_target_attr(target: Vec3) -> String {
    format!("{}m {}m {}m", target.x, target.y, target.z)
}
