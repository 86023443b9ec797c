use crate::constants::{CLASS_ACTIVE, CLASS_HIDDEN, CLASS_SPOTLIGHT};
use crate::core::constants::PAGE_FADE_MS;
use crate::core::{Screen, ScreenFlow};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedFlow = Rc<RefCell<ScreenFlow>>;

#[inline]
fn screen_el(document: &web::Document, screen: Screen) -> Option<web::HtmlElement> {
    dom::html_by_id(document, screen.element_id()).ok()
}

#[inline]
pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}

/// Put the DOM in line with the flow's starting state.
pub fn sync_initial(document: &web::Document, flow: &ScreenFlow) {
    for s in Screen::ALL {
        if let Some(el) = screen_el(document, s) {
            let cl = el.class_list();
            if flow.is_visible(s) {
                _ = cl.remove_1(CLASS_HIDDEN);
                _ = cl.add_1(CLASS_ACTIVE);
                dom::set_display(&el, "flex");
            } else {
                _ = cl.remove_1(CLASS_ACTIVE);
                dom::set_display(&el, "none");
            }
        } else {
            log::warn!("missing screen #{}", s.element_id());
        }
    }
    set_body_class(document, CLASS_SPOTLIGHT, flow.spotlight());
}

/// Fade `from` out, then swap display and fade `to` in on the next frame.
pub fn switch_page(document: &web::Document, flow: &SharedFlow, from: Screen, to: Screen) {
    if let Err(e) = flow.borrow_mut().begin_transition(from, to) {
        log::debug!("ignored transition: {}", e);
        return;
    }
    log::info!("screen {:?} -> {:?}", from, to);

    let from_el = screen_el(document, from);
    if let Some(el) = &from_el {
        let cl = el.class_list();
        _ = cl.remove_1(CLASS_ACTIVE);
        _ = cl.add_1(CLASS_HIDDEN);
    }

    let document = document.clone();
    let flow = flow.clone();
    dom::timeout(PAGE_FADE_MS, move || {
        if let Some(el) = &from_el {
            dom::set_display(el, "none");
        }
        let to_el = screen_el(&document, to);
        if let Some(el) = &to_el {
            dom::set_display(el, "flex");
        }
        dom::next_frame(move || {
            if let Some(el) = &to_el {
                let cl = el.class_list();
                _ = cl.remove_1(CLASS_HIDDEN);
                _ = cl.add_1(CLASS_ACTIVE);
            }
            let spotlight = {
                let mut f = flow.borrow_mut();
                f.finish_transition();
                f.spotlight()
            };
            set_body_class(&document, CLASS_SPOTLIGHT, spotlight);
        });
    });
}

/// Wire a button that advances from `from` to the following screen.
pub fn wire_advance_button(document: &web::Document, button_id: &str, flow: &SharedFlow, from: Screen) {
    let Some(to) = from.next() else {
        return;
    };
    let doc = document.clone();
    let flow = flow.clone();
    dom::add_click_listener(document, button_id, move || {
        switch_page(&doc, &flow, from, to);
    });
}
