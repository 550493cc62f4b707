//! Tunable simulation and rendering parameters.
//!
//! Parameters come in two flavours. Compile-affecting ones (effect toggles,
//! quality tier, observer mode, planet visibility) change the generated shader
//! text, so writing a different value raises the dirty flag. Continuous ones
//! (distances, radii, inclination, time scale) only travel through uniforms and
//! never touch the dirty flag.

use crate::constants::*;
use crate::template::{TemplateContext, TemplateValue};

/// Ray marching quality tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Quality {
    Fast,
    #[default]
    Medium,
    High,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Fast, Quality::Medium, Quality::High];

    /// Number of integration steps per ray.
    pub fn n_steps(self) -> u32 {
        match self {
            Quality::Fast => STEPS_FAST,
            Quality::Medium => STEPS_MEDIUM,
            Quality::High => STEPS_HIGH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quality::Fast => "fast",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }
}

/// Shader effects that can be switched on and off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    AccretionDisk,
    Aberration,
    Beaming,
    DopplerShift,
    GravitationalTimeDilation,
    LorentzContraction,
    LightTravelTime,
}

impl Effect {
    pub const ALL: [Effect; 7] = [
        Effect::AccretionDisk,
        Effect::Aberration,
        Effect::Beaming,
        Effect::DopplerShift,
        Effect::GravitationalTimeDilation,
        Effect::LorentzContraction,
        Effect::LightTravelTime,
    ];

    /// Template key under which the toggle is exposed.
    pub fn key(self) -> &'static str {
        match self {
            Effect::AccretionDisk => "accretion_disk",
            Effect::Aberration => "aberration",
            Effect::Beaming => "beaming",
            Effect::DopplerShift => "doppler_shift",
            Effect::GravitationalTimeDilation => "gravitational_time_dilation",
            Effect::LorentzContraction => "lorentz_contraction",
            Effect::LightTravelTime => "light_travel_time",
        }
    }

    /// Human readable label for hints and logs.
    pub fn label(self) -> &'static str {
        match self {
            Effect::AccretionDisk => "accretion disk",
            Effect::Aberration => "aberration",
            Effect::Beaming => "beaming",
            Effect::DopplerShift => "doppler shift",
            Effect::GravitationalTimeDilation => "time dilation",
            Effect::LorentzContraction => "lorentz contraction",
            Effect::LightTravelTime => "light travel time",
        }
    }
}

/// Whether the observer follows a circular orbit or sits where the camera puts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverMode {
    Orbiting,
    Stationary,
}

impl ObserverMode {
    #[inline]
    pub fn from_motion(motion: bool) -> Self {
        if motion {
            ObserverMode::Orbiting
        } else {
            ObserverMode::Stationary
        }
    }

    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, ObserverMode::Orbiting)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct EffectFlags {
    accretion_disk: bool,
    aberration: bool,
    beaming: bool,
    doppler_shift: bool,
    gravitational_time_dilation: bool,
    lorentz_contraction: bool,
    light_travel_time: bool,
}

impl EffectFlags {
    const ALL_ON: EffectFlags = EffectFlags {
        accretion_disk: true,
        aberration: true,
        beaming: true,
        doppler_shift: true,
        gravitational_time_dilation: true,
        lorentz_contraction: true,
        light_travel_time: true,
    };

    fn slot(&mut self, effect: Effect) -> &mut bool {
        match effect {
            Effect::AccretionDisk => &mut self.accretion_disk,
            Effect::Aberration => &mut self.aberration,
            Effect::Beaming => &mut self.beaming,
            Effect::DopplerShift => &mut self.doppler_shift,
            Effect::GravitationalTimeDilation => &mut self.gravitational_time_dilation,
            Effect::LorentzContraction => &mut self.lorentz_contraction,
            Effect::LightTravelTime => &mut self.light_travel_time,
        }
    }

    fn get(&self, effect: Effect) -> bool {
        match effect {
            Effect::AccretionDisk => self.accretion_disk,
            Effect::Aberration => self.aberration,
            Effect::Beaming => self.beaming,
            Effect::DopplerShift => self.doppler_shift,
            Effect::GravitationalTimeDilation => self.gravitational_time_dilation,
            Effect::LorentzContraction => self.lorentz_contraction,
            Effect::LightTravelTime => self.light_travel_time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverParams {
    pub mode: ObserverMode,
    pub distance: f64,
    pub orbital_inclination_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetParams {
    pub enabled: bool,
    pub distance: f64,
    pub radius: f64,
}

/// Every tunable parameter plus the pending-recompile flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterStore {
    quality: Quality,
    effects: EffectFlags,
    observer: ObserverParams,
    planet: PlanetParams,
    time_scale: f64,
    dirty: bool,
}

impl Default for ParameterStore {
    /// Documented defaults. Starts dirty so one compile happens before the first render.
    fn default() -> Self {
        Self {
            quality: Quality::Medium,
            effects: EffectFlags::ALL_ON,
            observer: ObserverParams {
                mode: ObserverMode::from_motion(DEFAULT_OBSERVER_MOTION),
                distance: DEFAULT_OBSERVER_DISTANCE,
                orbital_inclination_deg: DEFAULT_ORBITAL_INCLINATION_DEG,
            },
            planet: PlanetParams {
                enabled: DEFAULT_PLANET_ENABLED,
                distance: DEFAULT_PLANET_DISTANCE,
                radius: DEFAULT_PLANET_RADIUS,
            },
            time_scale: DEFAULT_TIME_SCALE,
            dirty: true,
        }
    }
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------- getters ----------------

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn effect(&self, effect: Effect) -> bool {
        self.effects.get(effect)
    }

    pub fn observer(&self) -> &ObserverParams {
        &self.observer
    }

    pub fn observer_mode(&self) -> ObserverMode {
        self.observer.mode
    }

    pub fn planet(&self) -> &PlanetParams {
        &self.planet
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// True while the compiled program is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Anything in the scene that changes without user input.
    pub fn has_moving_parts(&self) -> bool {
        self.planet.enabled || self.observer.mode.is_moving()
    }

    /// The planet is only drawn above the fast tier.
    pub fn planet_visible(&self) -> bool {
        self.planet.enabled && self.quality != Quality::Fast
    }

    // ---------------- compile-affecting setters ----------------

    pub fn set_quality(&mut self, quality: Quality) {
        if self.quality != quality {
            self.quality = quality;
            self.dirty = true;
        }
    }

    pub fn set_effect(&mut self, effect: Effect, enabled: bool) {
        let slot = self.effects.slot(effect);
        if *slot != enabled {
            *slot = enabled;
            self.dirty = true;
        }
    }

    pub fn set_observer_mode(&mut self, mode: ObserverMode) {
        if self.observer.mode != mode {
            self.observer.mode = mode;
            self.dirty = true;
        }
    }

    pub fn set_planet_enabled(&mut self, enabled: bool) {
        if self.planet.enabled != enabled {
            self.planet.enabled = enabled;
            self.dirty = true;
        }
    }

    // ---------------- continuous setters (never dirty) ----------------

    /// Clamped to a range where the circular orbit stays sub-luminal. Returns the value stored.
    pub fn set_observer_distance(&mut self, distance: f64) -> f64 {
        if distance.is_finite() {
            let clamped = distance.clamp(OBSERVER_DISTANCE_MIN, OBSERVER_DISTANCE_MAX);
            if clamped != distance {
                log::debug!("[params] observer distance {distance} clamped to {clamped}");
            }
            self.observer.distance = clamped;
        }
        self.observer.distance
    }

    pub fn set_orbital_inclination(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.observer.orbital_inclination_deg = degrees;
        }
    }

    pub fn set_planet_distance(&mut self, distance: f64) {
        if distance.is_finite() {
            self.planet.distance = distance;
        }
    }

    pub fn set_planet_radius(&mut self, radius: f64) {
        if radius.is_finite() {
            self.planet.radius = radius.max(0.0);
        }
    }

    /// Negative scales would run proper time backwards, so they clamp to zero.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.time_scale = scale.max(0.0);
        }
    }

    // ---------------- compile state ----------------

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Restore every documented default. Leaves the store dirty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Key/value map the shader template is rendered against.
    pub fn template_context(&self) -> TemplateContext {
        let mut ctx = TemplateContext::default();
        ctx.insert("n_steps", TemplateValue::Int(i64::from(self.quality.n_steps())));
        ctx.insert("quality", TemplateValue::Text(self.quality.name().to_string()));
        for effect in Effect::ALL {
            ctx.insert(effect.key(), TemplateValue::Bool(self.effect(effect)));
        }
        ctx.insert("planet_enabled", TemplateValue::Bool(self.planet_visible()));
        ctx.insert(
            "observer_motion",
            TemplateValue::Bool(self.observer.mode.is_moving()),
        );
        ctx
    }
}
