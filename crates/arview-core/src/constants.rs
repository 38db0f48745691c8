use std::time::Duration;

// Shared gesture/easing tuning constants used by the engine and its hosts.

// Transform bounds
pub const SCALE_MIN: f32 = 0.1;
pub const SCALE_MAX: f32 = 3.0;

// Gesture sensitivity
pub const DRAG_SENSITIVITY: f32 = 0.005; // scene metres per screen pixel
pub const ROTATION_SENSITIVITY: f32 = 0.5; // < 1 damps two-finger jitter

// Easing
pub const SMOOTHING_FACTOR: f32 = 0.2; // fraction of the remaining gap closed per frame
pub const CHANGE_THRESHOLD: f32 = 0.001; // smaller writes black out some renderers

// Session lifecycle
pub const HINT_DURATION: Duration = Duration::from_secs(4);
pub const AUTO_AR_DELAY: Duration = Duration::from_millis(500);
