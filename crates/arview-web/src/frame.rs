use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    raf_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame: {:?}", e),
            }
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop.
///
/// The tick closure only holds a weak reference to the loop, so dropping the
/// handle frees it; `Drop` also cancels the pending frame, so no callback
/// outlives the handle.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            raf_id: Cell::new(None),
            cancelled: Cell::new(false),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Strong ref keeps the closure alive for the rest of this call.
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.raf_id.set(None);
            if state.cancelled.get() {
                return;
            }
            on_frame();
            if !state.cancelled.get() {
                state.request();
            }
        }) as Box<dyn FnMut()>));
        state.request();
        Self { state }
    }

    pub fn cancel(&self) {
        if self.state.cancelled.replace(true) {
            return;
        }
        if let Some(id) = self.state.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
