//! Target and current transform stores.
//!
//! Both wrap the same [`TransformState`] but are distinct types so each can
//! only be written by its owner: the gesture classifier writes [`Target`],
//! the easing loop writes [`Current`], and the session controller resets
//! both. The setters are crate-private; hosts only ever read.

use crate::constants::{SCALE_MAX, SCALE_MIN};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Uniform scale, kept within `[SCALE_MIN, SCALE_MAX]`.
    pub scale: f32,
    /// Yaw in degrees. Not wrapped; a full twist past 360 keeps counting.
    pub rotation_deg: f32,
    pub position_x: f32,
    pub position_z: f32,
}

impl TransformState {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_deg: 0.0,
        position_x: 0.0,
        position_z: 0.0,
    };

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.position_x, self.position_z)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[inline]
pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(SCALE_MIN, SCALE_MAX)
}

/// Transform a gesture is steering toward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Target(TransformState);

impl Target {
    #[inline]
    pub fn get(&self) -> &TransformState {
        &self.0
    }

    pub(crate) fn set_scale(&mut self, scale: f32) {
        self.0.scale = clamp_scale(scale);
    }

    pub(crate) fn set_rotation(&mut self, rotation_deg: f32) {
        self.0.rotation_deg = rotation_deg;
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.0.position_x = position.x;
        self.0.position_z = position.y;
    }

    pub(crate) fn reset(&mut self) {
        self.0 = TransformState::IDENTITY;
    }
}

/// Transform last applied to the render surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Current(TransformState);

impl Current {
    #[inline]
    pub fn get(&self) -> &TransformState {
        &self.0
    }

    pub(crate) fn state_mut(&mut self) -> &mut TransformState {
        &mut self.0
    }

    pub(crate) fn reset(&mut self) {
        self.0 = TransformState::IDENTITY;
    }
}
