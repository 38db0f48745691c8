//! AR session lifecycle and the event entry points a host calls.
//!
//! [`ArViewer`] owns every piece of mutable state: the session state, both
//! transform stores, the gesture classifier, the easing loop and the
//! scheduling handles. Hosts feed it discrete events (touch, session status,
//! model load, timers, buttons) and one `on_frame` per display frame while a
//! session is active; each call runs to completion before the next.

use crate::constants::{AUTO_AR_DELAY, HINT_DURATION};
use crate::easing::{yaw_orientation, EasingConfig, EasingLoop, TickReport};
use crate::gesture::{GestureClassifier, GestureConfig};
use crate::host::{Timer, ViewerHost};
use crate::options::ViewerOptions;
use crate::session::{ArStatus, SessionState};
use crate::surface::RenderSurface;
use crate::touch::TouchPoint;
use crate::transform::{Current, Target};
use glam::{Vec2, Vec3};
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    pub gesture: GestureConfig,
    pub easing: EasingConfig,
    pub hint_duration: Duration,
    pub auto_ar_delay: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            easing: EasingConfig::default(),
            hint_duration: HINT_DURATION,
            auto_ar_delay: AUTO_AR_DELAY,
        }
    }
}

/// Snapshot of the state a page would render controls from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerStatus {
    pub session: SessionState,
    pub loading: bool,
    pub ar_capable: bool,
    pub hint_visible: bool,
    pub auto_rotate: bool,
}

pub struct ArViewer<S: RenderSurface, H: ViewerHost> {
    config: ViewerConfig,
    options: ViewerOptions,
    surface: S,
    host: H,

    session: SessionState,
    target: Target,
    current: Current,
    gestures: GestureClassifier,
    easing: EasingLoop,

    frames: Option<H::FrameHandle>,
    hint_timer: Option<H::TimerHandle>,
    auto_ar_timer: Option<H::TimerHandle>,
    auto_ar_scheduled: bool,
    entered_at: Option<Instant>,

    ar_capable: bool,
    loading: bool,
    hint_visible: bool,
    auto_rotate: bool,
    disposed: bool,
}

impl<S: RenderSurface, H: ViewerHost> ArViewer<S, H> {
    /// `ar_capable` is the one-off device probe; when false the engine never
    /// attaches touch handlers or enters a session.
    pub fn new(
        mut surface: S,
        mut host: H,
        config: ViewerConfig,
        options: ViewerOptions,
        ar_capable: bool,
    ) -> Self {
        host.set_ar_available(ar_capable);
        host.set_loading_visible(true);
        surface.set_auto_rotate(true);
        log::info!(
            "[ar] viewer ready capable={} start_in_ar={}",
            ar_capable,
            options.start_in_ar
        );
        Self {
            gestures: GestureClassifier::new(config.gesture),
            easing: EasingLoop::new(config.easing),
            config,
            options,
            surface,
            host,
            session: SessionState::Inactive,
            target: Target::default(),
            current: Current::default(),
            frames: None,
            hint_timer: None,
            auto_ar_timer: None,
            auto_ar_scheduled: false,
            entered_at: None,
            ar_capable,
            loading: true,
            hint_visible: false,
            auto_rotate: true,
            disposed: false,
        }
    }

    pub fn status(&self) -> ViewerStatus {
        ViewerStatus {
            session: self.session,
            loading: self.loading,
            ar_capable: self.ar_capable,
            hint_visible: self.hint_visible,
            auto_rotate: self.auto_rotate,
        }
    }

    #[inline]
    pub fn session(&self) -> SessionState {
        self.session
    }
    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }
    #[inline]
    pub fn current(&self) -> &Current {
        &self.current
    }
    #[inline]
    pub fn gestures(&self) -> &GestureClassifier {
        &self.gestures
    }
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    // ---------------- Session lifecycle ----------------

    pub fn on_ar_status(&mut self, status: &ArStatus) {
        match status.session_state() {
            SessionState::Active => self.enter_session(),
            SessionState::Inactive => self.exit_session(),
        }
    }

    fn enter_session(&mut self) {
        if self.disposed || self.session.is_active() {
            return;
        }
        if !self.ar_capable {
            log::warn!("[ar] session start ignored: device not AR capable");
            return;
        }
        self.session = SessionState::Active;
        self.entered_at = Some(Instant::now());

        self.hint_visible = true;
        self.host.set_hint_visible(true);
        if let Some(old) = self.hint_timer.take() {
            self.host.cancel_timer(old);
        }
        self.hint_timer = Some(self.host.start_timer(Timer::HideHint, self.config.hint_duration));

        self.host.attach_touch();
        self.frames = Some(self.host.start_frames());
        log::info!("[ar] session started");
    }

    fn exit_session(&mut self) {
        if !self.session.is_active() {
            return;
        }
        self.session = SessionState::Inactive;
        self.stop_session_work();

        self.gestures.cancel();
        self.target.reset();
        self.current.reset();
        self.write_identity();

        let secs = self
            .entered_at
            .take()
            .map(|t| t.elapsed().as_secs_f32())
            .unwrap_or_default();
        log::info!("[ar] session ended after {:.1}s; transform reset", secs);
    }

    /// Cancel the frame loop and hint timer and detach touch, in one step.
    fn stop_session_work(&mut self) {
        if let Some(frames) = self.frames.take() {
            self.host.cancel_frames(frames);
        }
        self.host.detach_touch();
        if let Some(timer) = self.hint_timer.take() {
            self.host.cancel_timer(timer);
        }
        if self.hint_visible {
            self.hint_visible = false;
            self.host.set_hint_visible(false);
        }
    }

    /// The easing loop is stopped by now, so the model is snapped back directly.
    fn write_identity(&mut self) {
        self.surface.set_scale(Vec3::ONE);
        self.surface.set_orientation(yaw_orientation(0.0));
        self.easing.write_position(&mut self.surface, Vec2::ZERO);
    }

    /// Host teardown. Cancels everything still scheduled; later events are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.session.is_active() {
            self.session = SessionState::Inactive;
            self.stop_session_work();
            self.gestures.cancel();
        }
        if let Some(timer) = self.auto_ar_timer.take() {
            self.host.cancel_timer(timer);
        }
        log::debug!("[ar] viewer disposed");
    }

    // ---------------- Input ----------------

    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) {
        if !self.accepts_touch() {
            return;
        }
        self.gestures.touch_start(touches, &self.target);
        log::debug!("[gesture] begin {:?}", self.gestures.kind());
    }

    pub fn on_touch_move(&mut self, touches: &[TouchPoint]) {
        if !self.accepts_touch() {
            return;
        }
        self.gestures.touch_move(touches, &mut self.target);
    }

    /// `remaining` holds the fingers still down after the lift or cancel.
    pub fn on_touch_end(&mut self, remaining: &[TouchPoint]) {
        if !self.accepts_touch() {
            return;
        }
        self.gestures.touch_end(remaining, &self.target);
    }

    #[inline]
    fn accepts_touch(&self) -> bool {
        !self.disposed && self.session.is_active()
    }

    // ---------------- Scheduling ----------------

    pub fn on_frame(&mut self) -> TickReport {
        if self.disposed || !self.session.is_active() {
            return TickReport::default();
        }
        self.easing
            .tick(&self.target, &mut self.current, &mut self.surface)
    }

    pub fn on_timer(&mut self, timer: Timer) {
        if self.disposed {
            return;
        }
        match timer {
            Timer::HideHint => {
                if self.hint_timer.take().is_some() && self.hint_visible {
                    self.hint_visible = false;
                    self.host.set_hint_visible(false);
                }
            }
            Timer::AutoEnterAr => {
                if self.auto_ar_timer.take().is_some() && !self.session.is_active() {
                    log::info!("[ar] auto-entering AR");
                    self.host.activate_ar();
                }
            }
        }
    }

    /// The model finished loading. Only the first load counts.
    pub fn on_model_loaded(&mut self) {
        if self.disposed || !self.loading {
            return;
        }
        self.loading = false;
        self.host.set_loading_visible(false);

        if self.options.start_in_ar && self.ar_capable && !self.auto_ar_scheduled {
            self.auto_ar_scheduled = true;
            self.auto_ar_timer = Some(
                self.host
                    .start_timer(Timer::AutoEnterAr, self.config.auto_ar_delay),
            );
        }
    }

    // ---------------- Viewer controls ----------------

    /// "View in AR" button.
    pub fn request_ar(&mut self) {
        if self.disposed || !self.ar_capable || self.session.is_active() {
            return;
        }
        self.host.activate_ar();
    }

    pub fn reset_view(&mut self) {
        if self.disposed || self.session.is_active() {
            return;
        }
        self.surface.reset_view();
    }

    pub fn toggle_auto_rotate(&mut self) {
        if self.disposed || self.session.is_active() {
            return;
        }
        self.auto_rotate = !self.auto_rotate;
        self.surface.set_auto_rotate(self.auto_rotate);
        log::info!("[view] auto-rotate={}", self.auto_rotate);
    }
}
