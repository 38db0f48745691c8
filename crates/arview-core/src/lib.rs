//! Touch-gesture engine for previewing a 3D menu item in an AR session.
//!
//! Raw multi-touch input is classified into drag or pinch/rotate gestures
//! that steer a *target* transform. A per-frame easing loop moves the
//! *current* (applied) transform toward it and writes to the render surface
//! only when the change is large enough to matter. [`ArViewer`] ties these
//! together with the AR session lifecycle.
//!
//! Nothing here touches a platform API; the web front end supplies a
//! [`RenderSurface`] and a [`ViewerHost`].

pub mod constants;
pub mod easing;
pub mod engine;
pub mod gesture;
pub mod host;
pub mod options;
pub mod session;
pub mod surface;
pub mod touch;
pub mod transform;

pub use constants::*;
pub use easing::{EasingConfig, EasingLoop, TickReport};
pub use engine::{ArViewer, ViewerConfig, ViewerStatus};
pub use gesture::{GestureClassifier, GestureConfig, GestureKind, GestureSession};
pub use host::{Timer, ViewerHost};
pub use options::{is_ar_capable, ViewerOptions};
pub use session::{ArStatus, SessionState};
pub use surface::{RenderSurface, SurfaceError};
pub use touch::{TouchPoint, TouchSet};
pub use transform::{Current, Target, TransformState};
