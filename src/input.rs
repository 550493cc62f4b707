// Pointer drag tracking. Pure so it can be tested on the host.

/// Pointer currently rotating the view, if any.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: [f64; 2],
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, pos: [f64; 2]) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Movement since the previous event for the captured pointer, in pixels.
    pub fn move_to(&mut self, pointer_id: i32, pos: [f64; 2]) -> Option<[f64; 2]> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = [pos[0] - self.last[0], pos[1] - self.last[1]];
        self.last = pos;
        if !(delta[0].is_finite() && delta[1].is_finite()) {
            return None;
        }
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Backing-store size in device pixels for a CSS size and pixel ratio. Never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> [u32; 2] {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let px = |css: f64| {
        let v = (css * dpr).floor();
        if v.is_finite() && v >= 1.0 {
            v as u32
        } else {
            1
        }
    };
    [px(css_width), px(css_height)]
}

/// Clamp a frame delta to something the integrator should see in one step.
#[inline]
pub fn frame_dt(raw_sec: f64, max_sec: f64) -> f64 {
    if raw_sec.is_finite() {
        raw_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}
