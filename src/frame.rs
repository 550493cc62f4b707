use crate::constants::MAX_FRAME_DT_SEC;
use crate::{dom, input, overlay};
use blackhole_core::{
    Command, OrbitControls, RenderError, Session, SessionError, TextureSet, TickOutcome,
};
use blackhole_gpu::{DecodedImage, GpuRenderer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub renderer: GpuRenderer<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub last_size: [u32; 2],
    pub hint_text: String,
    pub halted: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        if self.halted {
            return;
        }
        let now = Instant::now();
        let dt = input::frame_dt((now - self.last_instant).as_secs_f64(), MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let size = [self.canvas.width(), self.canvas.height()];
        if size != self.last_size {
            self.last_size = size;
            self.renderer.resize(size[0], size[1]);
            self.session.borrow_mut().submit(Command::Resize {
                width: size[0],
                height: size[1],
            });
        }

        let control = self.controls.borrow().view_matrix();
        let outcome = self
            .session
            .borrow_mut()
            .tick(dt, &control, &mut self.renderer);
        match outcome {
            Ok(TickOutcome::Rendered { recompiled }) => {
                if recompiled {
                    log::info!("[shader] program recompiled");
                }
                if let Some(doc) = dom::window_document() {
                    overlay::update_hint(&doc, self.session.borrow().params(), &mut self.hint_text);
                }
            }
            Ok(TickOutcome::Skipped) => {}
            Err(SessionError::Compile(e)) => log::error!("[shader] {e}"),
            Err(SessionError::Render(RenderError::SurfaceLost)) => {
                log::warn!("[gpu] surface lost; redrawing next frame");
            }
            Err(SessionError::Render(RenderError::OutOfMemory)) => {
                log::error!("[gpu] out of memory; stopping render loop");
                self.halted = true;
            }
            Err(SessionError::Render(e)) => log::error!("[gpu] {e}"),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    textures: &TextureSet<DecodedImage>,
) -> Option<GpuRenderer<'static>> {
    // an owned canvas target gives the surface a 'static lifetime
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    match GpuRenderer::new(target, canvas.width(), canvas.height(), textures).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
