use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::*,
    event_loop::{EventLoop, EventLoopWindowTarget},
    keyboard::Key,
    window::{Window, WindowBuilder},
};

use blackhole_core::constants::{DEFAULT_RESOLUTION, DRAG_RADIANS_PER_PX};
use blackhole_core::{
    action_for_key, keymap, AssetError, AssetGate, Command, KeyAction, OrbitControls,
    RenderError, Session, SessionError, TextureKind,
};
use blackhole_gpu::{decode, DecodedImage, GpuRenderer};

const TEMPLATE_PATH: &str = "shaders/raytracer.wgsl";
const MAX_FRAME_DT_SEC: f64 = 0.25;
const WINDOW_TITLE: &str = "Black hole";

fn asset_dir() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets"))
}

fn read_err(path: &Path, e: std::io::Error) -> AssetError {
    AssetError::Load {
        name: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn load_assets(dir: &Path) -> AssetGate<DecodedImage> {
    let mut gate = AssetGate::new();
    let template_path = dir.join(TEMPLATE_PATH);
    gate.provide_template(
        std::fs::read_to_string(&template_path).map_err(|e| read_err(&template_path, e)),
    );
    for kind in TextureKind::ALL {
        let path = dir.join(kind.file_name());
        let decoded = std::fs::read(&path)
            .map_err(|e| read_err(&path, e))
            .and_then(|bytes| decode(kind, &bytes));
        gate.provide_texture_or(kind, decoded, DecodedImage::placeholder);
    }
    gate
}

struct App {
    window: Arc<Window>,
    renderer: GpuRenderer<'static>,
    session: Session,
    controls: OrbitControls,
    last_instant: Instant,
    cursor: [f64; 2],
    dragging: bool,
    show_hint: bool,
    title: String,
}

impl App {
    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.session.submit(Command::Resize { width, height });
    }

    fn key(&mut self, key: &str) {
        match action_for_key(key, self.session.params()) {
            Some(KeyAction::Submit(command)) => {
                log::info!("[keys] {key} -> {command:?}");
                self.session.submit(command);
            }
            Some(KeyAction::ResetAll) => {
                log::info!("[keys] reset");
                self.controls.reset();
                self.session.submit(Command::Reset);
            }
            Some(KeyAction::ToggleHint) => {
                self.show_hint = !self.show_hint;
                self.title.clear();
            }
            None => {}
        }
    }

    fn cursor_moved(&mut self, x: f64, y: f64) {
        let (dx, dy) = (x - self.cursor[0], y - self.cursor[1]);
        self.cursor = [x, y];
        if self.dragging {
            self.controls.drag(dx, dy, DRAG_RADIANS_PER_PX);
        }
    }

    /// Returns false when the loop should stop.
    fn redraw(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_instant)
            .as_secs_f64()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let control = self.controls.view_matrix();
        match self.session.tick(dt, &control, &mut self.renderer) {
            Ok(_) => {}
            Err(SessionError::Compile(e)) => log::error!("[shader] {e}"),
            Err(SessionError::Render(RenderError::SurfaceLost)) => {
                log::warn!("[gpu] surface lost; redrawing next frame");
            }
            Err(SessionError::Render(RenderError::OutOfMemory)) => {
                log::error!("[gpu] out of memory");
                return false;
            }
            Err(SessionError::Render(e)) => log::error!("[gpu] {e}"),
        }
        self.update_title();
        true
    }

    fn update_title(&mut self) {
        let title = if self.show_hint {
            format!("{WINDOW_TITLE} | {}", keymap::describe(self.session.params()))
        } else {
            WINDOW_TITLE.to_string()
        };
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }
    }

    fn handle(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Character(text),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.key(text.as_str()),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.dragging = state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(position.x, position.y),
            WindowEvent::RedrawRequested => {
                if !self.redraw() {
                    elwt.exit();
                }
            }
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let dir = asset_dir();
    log::info!("[assets] loading from {}", dir.display());
    let (textures, template) = load_assets(&dir).into_parts()?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                DEFAULT_RESOLUTION[0],
                DEFAULT_RESOLUTION[1],
            ))
            .build(&event_loop)?,
    );
    let size = window.inner_size();
    let renderer = pollster::block_on(GpuRenderer::new(
        Arc::clone(&window),
        size.width,
        size.height,
        &textures,
    ))?;

    let mut app = App {
        window,
        renderer,
        session: Session::new(template, [size.width, size.height]),
        controls: OrbitControls::default(),
        last_instant: Instant::now(),
        cursor: [0.0, 0.0],
        dragging: false,
        show_hint: true,
        title: String::new(),
    };

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == app.window.id() => {
            app.handle(event, elwt)
        }
        Event::AboutToWait => app.window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
