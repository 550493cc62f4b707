use crate::constants::{HINT_ID, START_OVERLAY_ID};
use blackhole_core::ParameterStore;
use web_sys as web;

#[inline]
pub fn hide_start(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
    }
}

pub fn toggle_hint(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().toggle("hidden");
    }
}

/// Rewrite the hint line when the parameter summary changed.
pub fn update_hint(document: &web::Document, params: &ParameterStore, last: &mut String) {
    let text = blackhole_core::keymap::describe(params);
    if text == *last {
        return;
    }
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        el.set_text_content(Some(&text));
    }
    *last = text;
}
