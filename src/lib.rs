#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::constants::CONFETTI_INTERVAL_MS;
use crate::core::{AppConfig, EffectBudget, EvasiveButton, Screen, ScreenFlow, SparkleThrottle};
use crate::effects::SharedBudget;
use crate::screens::SharedFlow;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod collage;
mod constants;
pub mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod screens;

fn read_config() -> (AppConfig, Vec<String>) {
    let query = web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    AppConfig::from_query(&query)
}

// "Yes": hide the question for good, expand the card and keep confetti coming.
fn wire_yes_button(document: &web::Document, flow: &SharedFlow, budget: &SharedBudget) {
    let doc = document.clone();
    let flow = flow.clone();
    let budget = budget.clone();
    dom::add_click_listener(document, YES_BTN_ID, move || {
        match flow.borrow_mut().celebrate() {
            Ok(true) => {}
            Ok(false) => return,
            Err(e) => {
                log::debug!("yes ignored: {}", e);
                return;
            }
        }
        log::info!("celebration started");

        screens::set_body_class(&doc, CLASS_SPOTLIGHT, false);
        screens::set_body_class(&doc, CLASS_CELEBRATING, true);

        if let Some(proposal) = doc.get_element_by_id(Screen::Proposal.element_id()) {
            for sel in [QUESTION_SELECTOR, BUTTONS_SELECTOR] {
                if let Some(el) = dom::query_html(&proposal, sel) {
                    dom::set_display(&el, "none");
                }
            }
            if let Some(wrapper) = dom::query_html(&proposal, CONTENT_WRAPPER_SELECTOR) {
                _ = wrapper.class_list().add_1(CLASS_EXPANDED);
            }
        }
        if let Some(c) = doc.get_element_by_id(CELEBRATION_ID) {
            _ = c.class_list().remove_1(CLASS_HIDDEN);
        }

        effects::fire_confetti(&doc, &budget);
        let doc_tick = doc.clone();
        let budget_tick = budget.clone();
        dom::interval(CONFETTI_INTERVAL_MS, move || {
            effects::fire_confetti(&doc_tick, &budget_tick);
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (config, warnings) = read_config();
    console_log::init_with_level(config.log_level).ok();
    log::info!("proposal-web starting");
    for w in warnings {
        log::warn!("config: {}", w);
    }

    if let Err(e) = init(config) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: AppConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if config.muted {
        log::info!("background music muted");
    } else if let Err(e) = audio::wire_background_music(&document, config.music_volume) {
        log::warn!("background music unavailable: {:?}", e);
    }

    let flow: SharedFlow = Rc::new(RefCell::new(ScreenFlow::new()));
    screens::sync_initial(&document, &flow.borrow());
    screens::wire_advance_button(&document, START_BTN_ID, &flow, Screen::Landing);
    screens::wire_advance_button(&document, NEXT_BTN_ID, &flow, Screen::Memories);

    let budget: SharedBudget = Rc::new(RefCell::new(EffectBudget::default()));
    wire_yes_button(&document, &flow, &budget);

    if let Err(e) = collage::render(&document, config.photos) {
        log::warn!("collage skipped: {:?}", e);
    }
    match dom::html_by_id(&document, PARTICLES_CONTAINER_ID) {
        Ok(container) => effects::spawn_particles(&document, &container, config.particles),
        Err(e) => log::warn!("particles skipped: {:?}", e),
    }

    let pointer = Rc::new(RefCell::new(events::PointerState::default()));
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        pointer: pointer.clone(),
        budget: budget.clone(),
        throttle: Rc::new(RefCell::new(SparkleThrottle::default())),
        clock: Instant::now(),
    });

    let no_btn = dom::html_by_id(&document, NO_BTN_ID)?;
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        flow,
        pointer,
        no_btn,
        button: EvasiveButton::default(),
    })));

    Ok(())
}
