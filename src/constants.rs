// Web front-end constants: DOM ids and asset locations.
// Physics and key-step tuning lives in `blackhole_core::constants`.

pub const CANVAS_ID: &str = "app-canvas";
pub const HINT_ID: &str = "hint-overlay";
pub const START_OVERLAY_ID: &str = "start-overlay";

// Relative to the page
pub const ASSET_BASE_URL: &str = "assets/";
pub const TEMPLATE_PATH: &str = "shaders/raytracer.wgsl";

// Longest frame delta fed to the session; larger gaps (tab in background) are truncated.
pub const MAX_FRAME_DT_SEC: f64 = 0.25;
