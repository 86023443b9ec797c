use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("no #{} to attach click handler", element_id),
    }
}

pub fn create_div(document: &web::Document, class: &str) -> Result<web::HtmlElement, JsValue> {
    let el = document.create_element("div")?.dyn_into::<web::HtmlElement>()?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Set several inline style properties, ignoring rejected values.
pub fn set_styles(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn set_display(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("display", value);
}

/// Run `f` once after `ms` milliseconds.
pub fn timeout(ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// Run `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Run `f` every `ms` milliseconds for the lifetime of the page.
pub fn interval(ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = web::window().and_then(|w| {
        w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()
    });
    closure.forget();
    id
}

fn set_prop(obj: &js_sys::Object, key: &str, value: &JsValue) {
    _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), value);
}

/// One Web Animations keyframe, given as (property, value) pairs.
pub fn keyframe(props: &[(&str, JsValue)]) -> js_sys::Object {
    let kf = js_sys::Object::new();
    for (k, v) in props {
        set_prop(&kf, k, v);
    }
    kf
}

#[derive(Clone, Copy, Debug)]
pub struct AnimationTiming {
    pub duration_ms: f64,
    pub easing: &'static str,
    pub iterations: f64,
    pub alternate: bool,
}

impl AnimationTiming {
    pub fn once(duration_ms: f64, easing: &'static str) -> Self {
        Self {
            duration_ms,
            easing,
            iterations: 1.0,
            alternate: false,
        }
    }

    pub fn forever_alternate(duration_ms: f64, easing: &'static str) -> Self {
        Self {
            duration_ms,
            easing,
            iterations: f64::INFINITY,
            alternate: true,
        }
    }
}

/// `element.animate(keyframes, options)`.
pub fn animate(
    el: &web::Element,
    keyframes: &[js_sys::Object],
    timing: AnimationTiming,
) -> web::Animation {
    let frames = js_sys::Array::new();
    for kf in keyframes {
        frames.push(kf);
    }
    let opts = js_sys::Object::new();
    set_prop(&opts, "duration", &JsValue::from_f64(timing.duration_ms));
    set_prop(&opts, "easing", &JsValue::from_str(timing.easing));
    set_prop(&opts, "iterations", &JsValue::from_f64(timing.iterations));
    if timing.alternate {
        set_prop(&opts, "direction", &JsValue::from_str("alternate"));
    }
    let frames_obj: &js_sys::Object = &frames;
    el.animate_with_keyframe_animation_options(Some(frames_obj), opts.unchecked_ref())
}
