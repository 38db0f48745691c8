// Recording fakes for the surface and host traits, shared by the integration tests.

#![allow(dead_code)]

use arview_core::{
    ArStatus, ArViewer, RenderSurface, SurfaceError, Timer, TouchPoint, ViewerConfig, ViewerHost,
    ViewerOptions,
};
use glam::{Vec2, Vec3};
use std::time::Duration;

#[derive(Default)]
pub struct RecordingSurface {
    pub camera_target_supported: bool,
    pub scale_writes: Vec<Vec3>,
    pub orientation_writes: Vec<Vec3>,
    pub camera_writes: Vec<Vec3>,
    pub view_resets: usize,
    pub auto_rotate: Option<bool>,
}

impl RecordingSurface {
    pub fn with_camera_target() -> Self {
        Self {
            camera_target_supported: true,
            ..Self::default()
        }
    }

    pub fn transform_writes(&self) -> usize {
        self.scale_writes.len() + self.orientation_writes.len() + self.camera_writes.len()
    }
}

impl RenderSurface for RecordingSurface {
    fn set_scale(&mut self, scale: Vec3) {
        self.scale_writes.push(scale);
    }

    fn set_orientation(&mut self, orientation_deg: Vec3) {
        self.orientation_writes.push(orientation_deg);
    }

    fn set_camera_target(&mut self, target: Vec3) -> Result<(), SurfaceError> {
        if !self.camera_target_supported {
            return Err(SurfaceError::Unsupported("camera-target"));
        }
        self.camera_writes.push(target);
        Ok(())
    }

    fn reset_view(&mut self) {
        self.view_resets += 1;
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = Some(enabled);
    }
}

#[derive(Default)]
pub struct RecordingHost {
    next_id: u32,
    pub running_frames: Option<u32>,
    pub frames_started: usize,
    pub frames_cancelled: usize,
    pub timers_started: Vec<(u32, Timer, Duration)>,
    pub timers_cancelled: Vec<u32>,
    pub touch_attached: bool,
    pub attach_count: usize,
    pub hint_visible: bool,
    pub loading_visible: bool,
    pub ar_available: Option<bool>,
    pub ar_activations: usize,
}

impl RecordingHost {
    pub fn pending_timers(&self, kind: Timer) -> usize {
        self.timers_started
            .iter()
            .filter(|(id, t, _)| *t == kind && !self.timers_cancelled.contains(id))
            .count()
    }
}

impl ViewerHost for RecordingHost {
    type FrameHandle = u32;
    type TimerHandle = u32;

    fn start_frames(&mut self) -> u32 {
        self.next_id += 1;
        self.frames_started += 1;
        self.running_frames = Some(self.next_id);
        self.next_id
    }

    fn cancel_frames(&mut self, handle: u32) {
        assert_eq!(self.running_frames, Some(handle), "cancelled a stale frame handle");
        self.running_frames = None;
        self.frames_cancelled += 1;
    }

    fn start_timer(&mut self, timer: Timer, delay: Duration) -> u32 {
        self.next_id += 1;
        self.timers_started.push((self.next_id, timer, delay));
        self.next_id
    }

    fn cancel_timer(&mut self, handle: u32) {
        self.timers_cancelled.push(handle);
    }

    fn attach_touch(&mut self) {
        self.touch_attached = true;
        self.attach_count += 1;
    }

    fn detach_touch(&mut self) {
        self.touch_attached = false;
    }

    fn set_hint_visible(&mut self, visible: bool) {
        self.hint_visible = visible;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_ar_available(&mut self, available: bool) {
        self.ar_available = Some(available);
    }

    fn activate_ar(&mut self) {
        self.ar_activations += 1;
    }
}

pub type Viewer = ArViewer<RecordingSurface, RecordingHost>;

pub fn viewer(ar_capable: bool, options: ViewerOptions) -> Viewer {
    ArViewer::new(
        RecordingSurface::with_camera_target(),
        RecordingHost::default(),
        ViewerConfig::default(),
        options,
        ar_capable,
    )
}

/// Capable viewer already inside an AR session.
pub fn active_viewer() -> Viewer {
    let mut v = viewer(true, ViewerOptions::default());
    v.on_ar_status(&started());
    v
}

pub fn started() -> ArStatus {
    ArStatus::from_model_viewer("session-started")
}

pub fn not_presenting() -> ArStatus {
    ArStatus::from_model_viewer("not-presenting")
}

pub fn pts(p: &[(f32, f32)]) -> Vec<TouchPoint> {
    p.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn run_frames(v: &mut Viewer, n: usize) {
    for _ in 0..n {
        v.on_frame();
    }
}
