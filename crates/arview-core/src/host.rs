use std::time::Duration;

/// One-shot timers the engine asks its host to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Hide the "pinch / drag" hint shown when an AR session starts.
    HideHint,
    /// Deferred activation for pages opened with the start-in-AR flag.
    AutoEnterAr,
}

/// Scheduling and UI hooks provided by the embedding page.
///
/// Handles are returned by `start_*` and moved back into `cancel_*`, so the
/// engine can only cancel what it actually holds. When a frame or timer
/// fires, the host calls back into [`crate::ArViewer::on_frame`] or
/// [`crate::ArViewer::on_timer`].
pub trait ViewerHost {
    type FrameHandle;
    type TimerHandle;

    /// Begin delivering one `on_frame` per display frame until cancelled.
    fn start_frames(&mut self) -> Self::FrameHandle;
    fn cancel_frames(&mut self, handle: Self::FrameHandle);

    fn start_timer(&mut self, timer: Timer, delay: Duration) -> Self::TimerHandle;
    fn cancel_timer(&mut self, handle: Self::TimerHandle);

    fn attach_touch(&mut self);
    fn detach_touch(&mut self);

    fn set_hint_visible(&mut self, visible: bool);
    fn set_loading_visible(&mut self, visible: bool);
    /// Show the AR button when `available`, otherwise the "needs a phone" note.
    fn set_ar_available(&mut self, available: bool);

    /// Ask the platform to enter an AR session. The outcome arrives later
    /// as a session status change.
    fn activate_ar(&mut self);
}
