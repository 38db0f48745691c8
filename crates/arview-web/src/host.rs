use crate::constants::{AR_BUTTON_ID, AR_UNSUPPORTED_ID, HINT_ID, LOADING_ID};
use crate::dom;
use crate::events::TouchListeners;
use crate::frame::FrameLoop;
use crate::surface::{self, ModelViewerSurface};
use crate::timing::timeout_ms;
use arview_core::{ArViewer, Timer, ViewerHost};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type Viewer = ArViewer<ModelViewerSurface, WebHost>;
pub type SharedViewer = Rc<RefCell<Viewer>>;
pub type WeakViewer = Weak<RefCell<Viewer>>;

/// Run `f` against the viewer if it is still alive and not mid-call.
///
/// Browser callbacks only hold a weak reference; a callback that arrives while
/// the viewer is borrowed (or after teardown) is logged and dropped.
pub fn with_viewer(viewer: &WeakViewer, f: impl FnOnce(&mut Viewer)) {
    let Some(rc) = viewer.upgrade() else {
        return;
    };
    match rc.try_borrow_mut() {
        Ok(mut v) => f(&mut v),
        Err(_) => log::warn!("[host] viewer busy; event dropped"),
    };
}

/// Pending `setTimeout`; cancelling clears it.
pub struct Timeout {
    id: Option<i32>,
}

/// [`ViewerHost`] wired to the browser: rAF frames, `setTimeout` timers,
/// touch listeners on the `<model-viewer>` element and the page's overlays.
pub struct WebHost {
    viewer: WeakViewer,
    document: web::Document,
    element: web::Element,
    touch: Option<TouchListeners>,
}

impl WebHost {
    pub fn new(viewer: WeakViewer, document: web::Document, element: web::Element) -> Self {
        Self {
            viewer,
            document,
            element,
            touch: None,
        }
    }
}

impl ViewerHost for WebHost {
    type FrameHandle = FrameLoop;
    type TimerHandle = Timeout;

    fn start_frames(&mut self) -> FrameLoop {
        let viewer = self.viewer.clone();
        FrameLoop::start(move || {
            with_viewer(&viewer, |v| {
                let report = v.on_frame();
                if report.any() {
                    log::trace!("[frame] {:?}", report);
                }
            })
        })
    }

    fn cancel_frames(&mut self, handle: FrameLoop) {
        handle.cancel();
    }

    fn start_timer(&mut self, timer: Timer, delay: Duration) -> Timeout {
        let viewer = self.viewer.clone();
        let callback = Closure::once_into_js(move || with_viewer(&viewer, |v| v.on_timer(timer)));
        let id = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout_ms(delay),
            )
            .map_err(|e| log::error!("[host] setTimeout {:?}: {:?}", timer, e))
            .ok()
        });
        Timeout { id }
    }

    fn cancel_timer(&mut self, handle: Timeout) {
        if let (Some(id), Some(w)) = (handle.id, web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }

    fn attach_touch(&mut self) {
        if self.touch.is_none() {
            self.touch = Some(TouchListeners::attach(&self.element, self.viewer.clone()));
        }
    }

    fn detach_touch(&mut self) {
        // Dropping removes the listeners.
        self.touch = None;
    }

    fn set_hint_visible(&mut self, visible: bool) {
        dom::set_visible(&self.document, HINT_ID, visible);
    }

    fn set_loading_visible(&mut self, visible: bool) {
        dom::set_visible(&self.document, LOADING_ID, visible);
    }

    fn set_ar_available(&mut self, available: bool) {
        dom::set_visible(&self.document, AR_BUTTON_ID, available);
        dom::set_visible(&self.document, AR_UNSUPPORTED_ID, !available);
    }

    fn activate_ar(&mut self) {
        // Deferred: model-viewer may report `ar-status` while we still hold the viewer.
        let element = self.element.clone();
        spawn_local(async move {
            if let Err(e) = surface::activate_ar(&element) {
                log::error!("[ar] activateAR failed: {:?}", e);
            }
        });
    }
}
