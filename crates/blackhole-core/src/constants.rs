// Physical constants, parameter defaults and tuning values shared by both frontends.
//
// Geometric units throughout: the horizon radius is 1 and the speed of light is 1.
// The defaults below are also the values restored by a reset.

// Geometry
pub const HORIZON_RADIUS: f64 = 1.0;
// Radii closer than this to the horizon are clamped before entering sqrt/division.
pub const HORIZON_EPSILON: f64 = 1e-6;
// Upper bound on v^2 handed to the time dilation factor.
pub const MAX_SPEED_SQ: f64 = 1.0 - 1e-6;

// Orbital frame
pub const ORBITAL_FRAME_VELOCITY_BIAS: f64 = 4.0; // scales the travel direction before subtracting position
pub const DEGENERATE_FRAME_TOLERANCE: f64 = 1e-9;

// Render gate
pub const CAMERA_CHANGE_THRESHOLD: f64 = 1e-10; // Frobenius distance
// Most wall-clock time carried over from skipped ticks into the next render.
pub const MAX_PENDING_DT_SEC: f64 = 1.0;

// Observer defaults
pub const DEFAULT_OBSERVER_POSITION: [f64; 3] = [10.0, 0.0, 0.0];
pub const DEFAULT_OBSERVER_VELOCITY: [f64; 3] = [0.0, 1.0, 0.0];
pub const DEFAULT_OBSERVER_DISTANCE: f64 = 11.0;
pub const DEFAULT_ORBITAL_INCLINATION_DEG: f64 = -10.0;
pub const DEFAULT_OBSERVER_MOTION: bool = true;

// v = 1/sqrt(2(r-1)) stays below light speed for every r in this range
pub const OBSERVER_DISTANCE_MIN: f64 = 1.6;
pub const OBSERVER_DISTANCE_MAX: f64 = 50.0;

// Secondary body defaults
pub const DEFAULT_PLANET_ENABLED: bool = true;
pub const DEFAULT_PLANET_DISTANCE: f64 = 7.0;
pub const DEFAULT_PLANET_RADIUS: f64 = 0.4;

// Time
pub const DEFAULT_TIME_SCALE: f64 = 2.0;

// Ray marching step counts per quality tier
pub const STEPS_FAST: u32 = 40;
pub const STEPS_MEDIUM: u32 = 100;
pub const STEPS_HIGH: u32 = 200;

// Orbit controls
pub const DEFAULT_CONTROL_PITCH_DEG: f64 = 3.0;
pub const DEFAULT_CONTROL_YAW_DEG: f64 = 0.0;
pub const CONTROL_PITCH_LIMIT_DEG: f64 = 89.0;

// Viewport used until the first resize arrives
pub const DEFAULT_RESOLUTION: [u32; 2] = [1280, 720];

// Frontend input steps
pub const OBSERVER_DISTANCE_KEY_STEP: f64 = 0.5;
pub const PLANET_DISTANCE_KEY_STEP: f64 = 0.5;
pub const PLANET_RADIUS_KEY_STEP: f64 = 0.1;
pub const INCLINATION_KEY_STEP_DEG: f64 = 5.0;
pub const TIME_SCALE_KEY_STEP: f64 = 0.25;
pub const DRAG_RADIANS_PER_PX: f64 = 0.005;
