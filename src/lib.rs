#![cfg(target_arch = "wasm32")]
use blackhole_core::{OrbitControls, Session};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blackhole-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // nothing is drawn until every asset has arrived or been replaced by a fallback
    let gate = assets::load_all().await;
    let (textures, template) = gate.into_parts()?;

    let renderer = frame::init_gpu(&canvas, &textures)
        .await
        .ok_or_else(|| anyhow::anyhow!("WebGPU unavailable"))?;
    let size = [canvas.width(), canvas.height()];
    let session = Rc::new(RefCell::new(Session::new(template, size)));
    let controls = Rc::new(RefCell::new(OrbitControls::default()));

    events::wire_global_keydown(session.clone(), controls.clone());
    events::wire_orbit_drag(&canvas, controls.clone());
    overlay::hide_start(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        controls,
        renderer,
        canvas,
        last_instant: Instant::now(),
        last_size: size,
        hint_text: String::new(),
        halted: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
