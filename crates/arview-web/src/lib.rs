#![cfg(target_arch = "wasm32")]
use arview_core::{is_ar_capable, ArViewer, ViewerConfig, ViewerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod host;
mod input;
mod surface;
mod timing;

use constants::{MODEL_VIEWER_ID, MODEL_VIEWER_TAG};
use host::{SharedViewer, WebHost};
use surface::ModelViewerSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("arview-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Resolves once the `<model-viewer>` custom element is registered, so its
/// properties (`cameraTarget`, `activateAR`, `loaded`) exist on our element.
async fn model_viewer_defined(window: &web::Window) -> anyhow::Result<()> {
    let promise = window
        .custom_elements()
        .when_defined(MODEL_VIEWER_TAG)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let element = document
        .get_element_by_id(MODEL_VIEWER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", MODEL_VIEWER_ID))?;

    model_viewer_defined(&window).await?;

    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let ar_capable = is_ar_capable(&user_agent);
    let options = ViewerOptions::from_query(&window.location().search().unwrap_or_default());

    let viewer: SharedViewer = Rc::new_cyclic(|weak| {
        RefCell::new(ArViewer::new(
            ModelViewerSurface::new(element.clone()),
            WebHost::new(weak.clone(), document.clone(), element.clone()),
            ViewerConfig::default(),
            options,
            ar_capable,
        ))
    });

    events::wire_viewer_events(&element, &viewer);
    events::wire_buttons(&document, &viewer);
    events::wire_teardown(viewer);
    Ok(())
}
