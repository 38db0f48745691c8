use crate::constants::{
    AR_BUTTON_ID, AR_STATUS_EVENT, AUTO_ROTATE_ID, LOAD_EVENT, RESET_VIEW_ID, TOUCH_EVENTS,
};
use crate::dom;
use crate::host::{with_viewer, SharedViewer, WeakViewer};
use crate::input;
use crate::surface;
use arview_core::ArStatus;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Touch handlers on the viewer element, present only during an AR session.
/// Dropping the value removes them.
pub struct TouchListeners {
    target: web::Element,
    handlers: Vec<(&'static str, Closure<dyn FnMut(web::TouchEvent)>)>,
}

impl TouchListeners {
    pub fn attach(target: &web::Element, viewer: WeakViewer) -> Self {
        let handlers = TOUCH_EVENTS
            .iter()
            .map(|&kind| {
                let viewer = viewer.clone();
                let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
                    let touches = input::touch_set(&ev);
                    with_viewer(&viewer, |v| match kind {
                        "touchstart" => v.on_touch_start(&touches),
                        "touchmove" => v.on_touch_move(&touches),
                        _ => v.on_touch_end(&touches),
                    });
                    // keep the browser from scrolling or zooming the page underneath
                    ev.prevent_default();
                }) as Box<dyn FnMut(_)>);
                if let Err(e) =
                    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
                {
                    log::error!("[touch] add {} listener: {:?}", kind, e);
                }
                (kind, closure)
            })
            .collect();
        log::debug!("[touch] listeners attached");
        Self {
            target: target.clone(),
            handlers,
        }
    }
}

impl Drop for TouchListeners {
    fn drop(&mut self) {
        for (kind, closure) in &self.handlers {
            _ = self
                .target
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        log::debug!("[touch] listeners detached");
    }
}

fn status_from_event(ev: &web::Event) -> ArStatus {
    let status = ev
        .dyn_ref::<web::CustomEvent>()
        .map(|ce| ce.detail())
        .and_then(|detail| js_sys::Reflect::get(&detail, &JsValue::from_str("status")).ok())
        .and_then(|s| s.as_string())
        .unwrap_or_default();
    ArStatus::from_model_viewer(&status)
}

/// Session status and model load events from the `<model-viewer>` element.
pub fn wire_viewer_events(el: &web::Element, viewer: &SharedViewer) {
    let weak = Rc::downgrade(viewer);
    let on_status = Closure::wrap(Box::new(move |ev: web::Event| {
        let status = status_from_event(&ev);
        log::info!("[ar] status {:?}", status);
        with_viewer(&weak, |v| v.on_ar_status(&status));
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback(AR_STATUS_EVENT, on_status.as_ref().unchecked_ref());
    on_status.forget();

    let weak = Rc::downgrade(viewer);
    let on_load = Closure::wrap(Box::new(move || {
        with_viewer(&weak, |v| v.on_model_loaded());
    }) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback(LOAD_EVENT, on_load.as_ref().unchecked_ref());
    on_load.forget();

    // The model may have finished before we got here.
    if surface::is_loaded(el) {
        with_viewer(&Rc::downgrade(viewer), |v| v.on_model_loaded());
    }
}

pub fn wire_buttons(document: &web::Document, viewer: &SharedViewer) {
    let weak = Rc::downgrade(viewer);
    dom::add_click_listener(document, AR_BUTTON_ID, move || {
        with_viewer(&weak, |v| v.request_ar());
    });

    let weak = Rc::downgrade(viewer);
    dom::add_click_listener(document, RESET_VIEW_ID, move || {
        with_viewer(&weak, |v| v.reset_view());
    });

    let weak = Rc::downgrade(viewer);
    let doc = document.clone();
    dom::add_click_listener(document, AUTO_ROTATE_ID, move || {
        with_viewer(&weak, |v| {
            v.toggle_auto_rotate();
            dom::set_class(&doc, AUTO_ROTATE_ID, "active", v.status().auto_rotate);
        });
    });
}

/// Dispose the viewer when the page goes away.
///
/// This listener lives as long as the page and holds the only strong
/// reference to the viewer; everything else holds a `Weak`.
pub fn wire_teardown(viewer: SharedViewer) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || match viewer.try_borrow_mut() {
        Ok(mut v) => v.dispose(),
        Err(_) => log::warn!("[host] viewer busy at teardown"),
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
