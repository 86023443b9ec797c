use crate::core::{translate_css, EvasiveButton, Rect};
use crate::events::SharedPointer;
use crate::screens::SharedFlow;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub flow: SharedFlow,
    pub pointer: SharedPointer,
    pub no_btn: web::HtmlElement,
    pub button: EvasiveButton,
}

/// Whether the loop should keep running after this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Done,
}

fn viewport_size(window: &web::Window) -> Option<Vec2> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(w as f32, h as f32))
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStatus {
        {
            let flow = self.flow.borrow();
            if flow.is_celebrating() {
                return FrameStatus::Done;
            }
            if !flow.physics_active() {
                return FrameStatus::Continue;
            }
        }
        let Some(viewport) = web::window().as_ref().and_then(viewport_size) else {
            return FrameStatus::Continue;
        };

        let r = self.no_btn.get_bounding_client_rect();
        let rect = Rect::new(
            r.left() as f32,
            r.top() as f32,
            r.width() as f32,
            r.height() as f32,
        );
        let cursor = self.pointer.borrow().position;
        let offset = self.button.step(rect, cursor, viewport);
        _ = self
            .no_btn
            .style()
            .set_property("transform", &translate_css(offset));
        FrameStatus::Continue
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx.borrow_mut().frame() == FrameStatus::Done {
            log::debug!("evasive button loop stopped");
            // drops this closure once the current call returns
            let slot = tick_clone.clone();
            crate::dom::timeout(0, move || {
                slot.borrow_mut().take();
            });
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
