use crate::{dom, overlay};
use blackhole_core::{action_for_key, Command, KeyAction, OrbitControls, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<Session>>,
    controls: &Rc<RefCell<OrbitControls>>,
) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let action = action_for_key(&key, session.borrow().params());
    let Some(action) = action else {
        return;
    };
    match action {
        KeyAction::Submit(command) => {
            log::info!("[keys] {key} -> {command:?}");
            session.borrow_mut().submit(command);
        }
        KeyAction::ResetAll => {
            log::info!("[keys] reset");
            controls.borrow_mut().reset();
            session.borrow_mut().submit(Command::Reset);
        }
        KeyAction::ToggleHint => {
            if let Some(document) = dom::window_document() {
                overlay::toggle_hint(&document);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(session: Rc<RefCell<Session>>, controls: Rc<RefCell<OrbitControls>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session, &controls);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
