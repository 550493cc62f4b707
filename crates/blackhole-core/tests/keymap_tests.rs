// Keyboard bindings shared by the web and native frontends.

use blackhole_core::keymap::{describe, effect_for_key, quality_for_digit};
use blackhole_core::{action_for_key, Command, Effect, KeyAction, ParameterStore, Quality};

fn submitted(key: &str, params: &ParameterStore) -> Command {
    match action_for_key(key, params) {
        Some(KeyAction::Submit(cmd)) => cmd,
        other => panic!("{key:?} mapped to {other:?}"),
    }
}

#[test]
fn effect_keys_flip_current_state() {
    let mut params = ParameterStore::default();
    assert_eq!(
        submitted("b", &params),
        Command::SetEffect(Effect::Beaming, false)
    );
    params.set_effect(Effect::Beaming, false);
    assert_eq!(
        submitted("B", &params),
        Command::SetEffect(Effect::Beaming, true)
    );
}

#[test]
fn every_effect_has_a_key() {
    let keys = ["a", "b", "d", "g", "l", "t", "x"];
    let mapped: Vec<Effect> = keys.iter().filter_map(|k| effect_for_key(k)).collect();
    assert_eq!(mapped.len(), Effect::ALL.len());
    for effect in Effect::ALL {
        assert!(mapped.contains(&effect), "{effect:?} unbound");
    }
}

#[test]
fn digits_select_quality() {
    assert_eq!(quality_for_digit("1"), Some(Quality::Fast));
    assert_eq!(quality_for_digit("2"), Some(Quality::Medium));
    assert_eq!(quality_for_digit("3"), Some(Quality::High));
    assert_eq!(quality_for_digit("4"), None);
    let params = ParameterStore::default();
    assert_eq!(submitted("3", &params), Command::SetQuality(Quality::High));
}

#[test]
fn motion_and_planet_toggle() {
    let params = ParameterStore::default();
    assert_eq!(submitted("m", &params), Command::SetObserverMotion(false));
    assert_eq!(submitted("p", &params), Command::SetPlanetEnabled(false));
}

#[test]
fn steps_are_relative_to_current_values() {
    let params = ParameterStore::default();
    assert_eq!(submitted("[", &params), Command::SetObserverDistance(10.5));
    assert_eq!(submitted("]", &params), Command::SetObserverDistance(11.5));
    assert_eq!(submitted(",", &params), Command::SetTimeScale(1.75));
    assert_eq!(submitted(".", &params), Command::SetTimeScale(2.25));
    assert_eq!(submitted("-", &params), Command::SetPlanetDistance(6.5));
    assert_eq!(submitted("=", &params), Command::SetPlanetDistance(7.5));
    assert_eq!(submitted("<", &params), Command::SetOrbitalInclination(-15.0));
    assert_eq!(submitted(">", &params), Command::SetOrbitalInclination(-5.0));
}

#[test]
fn planet_radius_keys_step_and_session_clamps() {
    let params = ParameterStore::default();
    match submitted("}", &params) {
        Command::SetPlanetRadius(r) => assert!((r - 0.5).abs() < 1e-12),
        other => panic!("{other:?}"),
    }
    match submitted("{", &params) {
        Command::SetPlanetRadius(r) => assert!((r - 0.3).abs() < 1e-12),
        other => panic!("{other:?}"),
    }

    let mut small = ParameterStore::default();
    small.set_planet_radius(0.05);
    match submitted("{", &small) {
        Command::SetPlanetRadius(r) => {
            small.set_planet_radius(r);
            assert_eq!(small.planet().radius, 0.0);
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn frontend_actions_and_unbound_keys() {
    let params = ParameterStore::default();
    assert_eq!(action_for_key("r", &params), Some(KeyAction::ResetAll));
    assert_eq!(action_for_key("h", &params), Some(KeyAction::ToggleHint));
    assert_eq!(action_for_key("q", &params), None);
    assert_eq!(action_for_key("Shift", &params), None);
    assert_eq!(action_for_key("", &params), None);
}

#[test]
fn description_reflects_parameters() {
    let mut params = ParameterStore::default();
    let text = describe(&params);
    assert!(text.starts_with("medium"));
    assert!(text.contains("r=11.0"));
    assert!(text.contains("orbiting"));

    for effect in Effect::ALL {
        params.set_effect(effect, false);
    }
    params.set_planet_enabled(false);
    let text = describe(&params);
    assert!(text.contains("no effects"));
    assert!(text.contains("planet off"));
}
