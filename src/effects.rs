use crate::constants::{CLASS_BURST_PART, CLASS_CONFETTI, CLASS_PARTICLE, CLASS_SPARKLE};
use crate::core::constants::*;
use crate::core::{burst_angles, confetti_volley, EffectBudget, ParticleShape, ParticleSpec, SparkleSpec};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedBudget = Rc<RefCell<EffectBudget>>;

// Create a budgeted element on <body>; None when the budget is exhausted.
fn spawn_transient(
    document: &web::Document,
    budget: &SharedBudget,
    class: &str,
) -> Option<web::HtmlElement> {
    if !budget.borrow_mut().try_acquire() {
        log::trace!("effect budget exhausted, skipping .{}", class);
        return None;
    }
    let spawned = dom::create_div(document, class).and_then(|el| {
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        body.append_child(&el)?;
        Ok(el)
    });
    match spawned {
        Ok(el) => Some(el),
        Err(e) => {
            budget.borrow_mut().release();
            log::warn!("spawn .{} failed: {:?}", class, e);
            None
        }
    }
}

fn retire(el: &web::HtmlElement, budget: &SharedBudget) {
    el.remove();
    budget.borrow_mut().release();
}

fn retire_after(el: web::HtmlElement, budget: SharedBudget, ms: i32) {
    dom::timeout(ms, move || retire(&el, &budget));
}

/// Fill the particles container with looping hearts and dots.
pub fn spawn_particles(document: &web::Document, container: &web::HtmlElement, count: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        let spec = ParticleSpec::random(&mut rng);
        let el = match dom::create_div(document, CLASS_PARTICLE) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("particle create failed: {:?}", e);
                return;
            }
        };
        let size = format!("{}px", spec.size_px);
        let left = format!("{}vw", spec.left_vw);
        let duration = format!("{}s", spec.duration_s);
        let delay = format!("{}s", spec.delay_s);
        dom::set_styles(
            &el,
            &[
                ("width", &size),
                ("height", &size),
                ("left", &left),
                ("background-color", spec.color),
                ("animation-duration", &duration),
                ("animation-delay", &delay),
            ],
        );
        match spec.shape {
            ParticleShape::Heart => dom::set_styles(&el, &[("clip-path", HEART_CLIP_PATH)]),
            ParticleShape::Circle => dom::set_styles(&el, &[("border-radius", "50%")]),
        }
        _ = container.append_child(&el);
    }
    log::debug!("spawned {} particles", count);
}

pub fn spawn_sparkle(document: &web::Document, budget: &SharedBudget, x: f32, y: f32) {
    let spec = SparkleSpec::random(x, y, &mut rand::thread_rng());
    let Some(el) = spawn_transient(document, budget, CLASS_SPARKLE) else {
        return;
    };
    dom::set_styles(
        &el,
        &[
            ("left", &format!("{}px", spec.x)),
            ("top", &format!("{}px", spec.y)),
            ("background-color", spec.color),
        ],
    );
    retire_after(el, budget.clone(), SPARKLE_LIFETIME_MS);
}

pub fn spawn_burst(document: &web::Document, budget: &SharedBudget, x: f32, y: f32) {
    let left = format!("{}px", x);
    let top = format!("{}px", y);
    for angle in burst_angles(BURST_PARTS) {
        let Some(el) = spawn_transient(document, budget, CLASS_BURST_PART) else {
            return;
        };
        dom::set_styles(
            &el,
            &[
                ("left", &left),
                ("top", &top),
                ("--angle", &format!("{}deg", angle)),
            ],
        );
        retire_after(el, budget.clone(), BURST_LIFETIME_MS);
    }
}

/// One volley of confetti from the center of the viewport.
pub fn fire_confetti(document: &web::Document, budget: &SharedBudget) {
    let size = format!("{}px", CONFETTI_SIZE_PX);
    for piece in confetti_volley(CONFETTI_PER_VOLLEY, &mut rand::thread_rng()) {
        let Some(el) = spawn_transient(document, budget, CLASS_CONFETTI) else {
            return;
        };
        dom::set_styles(
            &el,
            &[
                ("position", "absolute"),
                ("width", &size),
                ("height", &size),
                ("background", piece.color),
                ("left", "50%"),
                ("top", "50%"),
                ("border-radius", "50%"),
            ],
        );
        let anim = dom::animate(
            &el,
            &[
                dom::keyframe(&[
                    ("transform", "translate(0, 0) scale(1)".into()),
                    ("opacity", JsValue::from_f64(1.0)),
                ]),
                dom::keyframe(&[
                    (
                        "transform",
                        format!("translate({}px, {}px) scale(0)", piece.dx, piece.dy).into(),
                    ),
                    ("opacity", JsValue::from_f64(0.0)),
                ]),
            ],
            dom::AnimationTiming::once(CONFETTI_DURATION_MS, "ease-out"),
        );
        let budget = budget.clone();
        let on_finish = Closure::once_into_js(move || retire(&el, &budget));
        anim.set_onfinish(Some(on_finish.unchecked_ref()));
    }
}
