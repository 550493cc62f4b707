// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_dt_cap_is_reasonable() {
    assert!(MAX_FRAME_DT_SEC > 1.0 / 30.0);
    assert!(MAX_FRAME_DT_SEC <= 1.0);
}

#[test]
fn asset_paths_resolve_under_base() {
    assert!(ASSET_BASE_URL.ends_with('/'));
    assert!(!TEMPLATE_PATH.starts_with('/'));
    assert!(TEMPLATE_PATH.ends_with(".wgsl"));
    // the template the page fetches is the one shipped in the repo
    let on_disk = format!("{}/{}{}", env!("CARGO_MANIFEST_DIR"), ASSET_BASE_URL, TEMPLATE_PATH);
    assert!(std::path::Path::new(&on_disk).exists(), "{on_disk}");
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, HINT_ID, START_OVERLAY_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
