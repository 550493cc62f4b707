//! Keyboard bindings shared by both frontends.
//!
//! Toggles and steps are computed from the parameters as of the last tick,
//! so the produced command is absolute and safe to replay.

use crate::constants::{
    INCLINATION_KEY_STEP_DEG, OBSERVER_DISTANCE_KEY_STEP, PLANET_DISTANCE_KEY_STEP,
    PLANET_RADIUS_KEY_STEP, TIME_SCALE_KEY_STEP,
};
use crate::params::{Effect, ParameterStore, Quality};
use crate::session::Command;

/// What a key press asks the frontend to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Submit(Command),
    /// Reset the orbit controls and the session together.
    ResetAll,
    ToggleHint,
}

#[inline]
pub fn effect_for_key(key: &str) -> Option<Effect> {
    match key {
        "a" | "A" => Some(Effect::AccretionDisk),
        "b" | "B" => Some(Effect::Beaming),
        "d" | "D" => Some(Effect::DopplerShift),
        "g" | "G" => Some(Effect::GravitationalTimeDilation),
        "l" | "L" => Some(Effect::LorentzContraction),
        "t" | "T" => Some(Effect::LightTravelTime),
        "x" | "X" => Some(Effect::Aberration),
        _ => None,
    }
}

#[inline]
pub fn quality_for_digit(key: &str) -> Option<Quality> {
    match key {
        "1" => Some(Quality::Fast),
        "2" => Some(Quality::Medium),
        "3" => Some(Quality::High),
        _ => None,
    }
}

pub fn action_for_key(key: &str, params: &ParameterStore) -> Option<KeyAction> {
    if let Some(effect) = effect_for_key(key) {
        return Some(KeyAction::Submit(Command::SetEffect(
            effect,
            !params.effect(effect),
        )));
    }
    if let Some(quality) = quality_for_digit(key) {
        return Some(KeyAction::Submit(Command::SetQuality(quality)));
    }
    let observer_distance = params.observer().distance;
    let planet_distance = params.planet().distance;
    let planet_radius = params.planet().radius;
    let inclination = params.observer().orbital_inclination_deg;
    let command = match key {
        "m" | "M" => Command::SetObserverMotion(!params.observer_mode().is_moving()),
        "p" | "P" => Command::SetPlanetEnabled(!params.planet().enabled),
        "[" => Command::SetObserverDistance(observer_distance - OBSERVER_DISTANCE_KEY_STEP),
        "]" => Command::SetObserverDistance(observer_distance + OBSERVER_DISTANCE_KEY_STEP),
        "," => Command::SetTimeScale(params.time_scale() - TIME_SCALE_KEY_STEP),
        "." => Command::SetTimeScale(params.time_scale() + TIME_SCALE_KEY_STEP),
        "-" | "_" => Command::SetPlanetDistance(planet_distance - PLANET_DISTANCE_KEY_STEP),
        "=" | "+" => Command::SetPlanetDistance(planet_distance + PLANET_DISTANCE_KEY_STEP),
        "{" => Command::SetPlanetRadius(planet_radius - PLANET_RADIUS_KEY_STEP),
        "}" => Command::SetPlanetRadius(planet_radius + PLANET_RADIUS_KEY_STEP),
        "<" => Command::SetOrbitalInclination(inclination - INCLINATION_KEY_STEP_DEG),
        ">" => Command::SetOrbitalInclination(inclination + INCLINATION_KEY_STEP_DEG),
        "r" | "R" => return Some(KeyAction::ResetAll),
        "h" | "H" => return Some(KeyAction::ToggleHint),
        _ => return None,
    };
    Some(KeyAction::Submit(command))
}

/// One-line summary of the current parameters for hint overlays and window titles.
pub fn describe(params: &ParameterStore) -> String {
    let on: Vec<&str> = Effect::ALL
        .iter()
        .filter(|e| params.effect(**e))
        .map(|e| e.label())
        .collect();
    format!(
        "{} • r={:.1} • time x{:.2} • planet {} • {} • {}",
        params.quality().name(),
        params.observer().distance,
        params.time_scale(),
        if params.planet().enabled { "on" } else { "off" },
        if params.observer_mode().is_moving() {
            "orbiting"
        } else {
            "stationary"
        },
        if on.is_empty() {
            "no effects".to_string()
        } else {
            on.join(", ")
        },
    )
}
