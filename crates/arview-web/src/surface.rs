use arview_core::surface::{camera_target_attr, orientation_attr, scale_attr};
use arview_core::{RenderSurface, SurfaceError};
use glam::Vec3;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`RenderSurface`] backed by a `<model-viewer>` element's attributes.
pub struct ModelViewerSurface {
    el: web::Element,
}

impl ModelViewerSurface {
    pub fn new(el: web::Element) -> Self {
        Self { el }
    }

    fn set_attr(&self, name: &'static str, value: &str) -> Result<(), SurfaceError> {
        self.el
            .set_attribute(name, value)
            .map_err(|e| SurfaceError::Rejected {
                what: name,
                reason: format!("{:?}", e),
            })
    }

    #[inline]
    fn has_property(&self, name: &str) -> bool {
        js_sys::Reflect::has(&self.el, &JsValue::from_str(name)).unwrap_or(false)
    }

    fn log_failure(result: Result<(), SurfaceError>) {
        if let Err(e) = result {
            log::error!("[surface] {}", e);
        }
    }
}

impl RenderSurface for ModelViewerSurface {
    fn set_scale(&mut self, scale: Vec3) {
        Self::log_failure(self.set_attr("scale", &scale_attr(scale)));
    }

    fn set_orientation(&mut self, orientation_deg: Vec3) {
        Self::log_failure(self.set_attr("orientation", &orientation_attr(orientation_deg)));
    }

    fn set_camera_target(&mut self, target: Vec3) -> Result<(), SurfaceError> {
        // Older builds, or an element not yet upgraded, have no cameraTarget.
        if !self.has_property("cameraTarget") {
            return Err(SurfaceError::Unsupported("camera-target"));
        }
        self.set_attr("camera-target", &camera_target_attr(target))
    }

    fn reset_view(&mut self) {
        Self::log_failure(self.set_attr("camera-orbit", "auto auto auto"));
        Self::log_failure(self.set_attr("field-of-view", "auto"));
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        let result = if enabled {
            self.el.set_attribute("auto-rotate", "")
        } else {
            self.el.remove_attribute("auto-rotate")
        };
        if let Err(e) = result {
            log::error!("[surface] auto-rotate: {:?}", e);
        }
    }
}

/// Call `activateAR()` on a `<model-viewer>` element.
pub fn activate_ar(el: &web::Element) -> anyhow::Result<()> {
    let f = js_sys::Reflect::get(el, &JsValue::from_str("activateAR"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let f: js_sys::Function = f
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("model-viewer has no activateAR"))?;
    f.call0(el).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Whether the element has already finished loading its model.
#[inline]
pub fn is_loaded(el: &web::Element) -> bool {
    js_sys::Reflect::get(el, &JsValue::from_str("loaded"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
