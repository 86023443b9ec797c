use crate::core::SparkleThrottle;
use crate::effects::{self, SharedBudget};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known pointer position in client pixels; `None` until the first move.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

pub type SharedPointer = Rc<RefCell<PointerState>>;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub pointer: SharedPointer,
    pub budget: SharedBudget,
    pub throttle: Rc<RefCell<SparkleThrottle>>,
    pub clock: Instant,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click_burst(&w);
}

// Tracks the cursor for the evasive button and leaves a sparkle trail.
fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        w.pointer.borrow_mut().position = Some(pos);

        let now_ms = w.clock.elapsed().as_secs_f64() * 1000.0;
        if w.throttle.borrow_mut().ready(now_ms) {
            effects::spawn_sparkle(&w.document, &w.budget, pos.x, pos.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_click_burst(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        effects::spawn_burst(
            &w.document,
            &w.budget,
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
    }) as Box<dyn FnMut(_)>);

    _ = w
        .document
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());

    closure.forget();
}
