use crate::input::DragState;
use blackhole_core::constants::DRAG_RADIANS_PER_PX;
use blackhole_core::OrbitControls;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> [f64; 2] {
    let rect = canvas.get_bounding_client_rect();
    [
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    ]
}

fn listen(
    canvas: &web::HtmlCanvasElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>
    );
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pointer drag on the canvas rotates the orbit controls.
pub fn wire_orbit_drag(canvas: &web::HtmlCanvasElement, controls: Rc<RefCell<OrbitControls>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let canvas_down = canvas.clone();
        listen(canvas, "pointerdown", move |ev| {
            if ev.button() != 0 {
                return;
            }
            drag.borrow_mut()
                .begin(ev.pointer_id(), pointer_canvas_px(&ev, &canvas_down));
            _ = canvas_down.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let drag = drag.clone();
        let canvas_move = canvas.clone();
        listen(canvas, "pointermove", move |ev| {
            let pos = pointer_canvas_px(&ev, &canvas_move);
            if let Some([dx, dy]) = drag.borrow_mut().move_to(ev.pointer_id(), pos) {
                controls.borrow_mut().drag(dx, dy, DRAG_RADIANS_PER_PX);
            }
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        listen(canvas, event, move |ev| {
            drag.borrow_mut().end(ev.pointer_id());
        });
    }
}
