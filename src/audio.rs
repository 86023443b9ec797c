use crate::constants::BG_MUSIC_ID;
use crate::core::AutoplayGate;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Gestures that count as user activation for media playback
const RETRY_EVENTS: [&str; 2] = ["click", "touchstart"];

type ListenerSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Clone)]
struct BackgroundMusic {
    document: web::Document,
    audio: web::HtmlAudioElement,
    gate: Rc<RefCell<AutoplayGate>>,
    retry: ListenerSlot,
}

impl BackgroundMusic {
    fn try_start(&self) {
        if !self.gate.borrow_mut().begin_attempt() {
            return;
        }
        let promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("audio play() threw: {:?}", e);
                self.gate.borrow_mut().failed();
                return;
            }
        };
        let this = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    this.gate.borrow_mut().succeeded();
                    log::info!(
                        "background music started after {} attempt(s)",
                        this.gate.borrow().attempts()
                    );
                    this.remove_retry_listeners();
                }
                Err(e) => {
                    log::info!("audio play failed (waiting for interaction): {:?}", e);
                    this.gate.borrow_mut().failed();
                }
            }
        });
    }

    fn remove_retry_listeners(&self) {
        if let Some(cb) = self.retry.borrow_mut().take() {
            for ev in RETRY_EVENTS {
                _ = self
                    .document
                    .remove_event_listener_with_callback(ev, cb.as_ref().unchecked_ref());
            }
        }
    }
}

/// Start the `<audio>` loop now if allowed, otherwise on the next gesture.
pub fn wire_background_music(document: &web::Document, volume: f64) -> anyhow::Result<()> {
    let audio = document
        .get_element_by_id(BG_MUSIC_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", BG_MUSIC_ID))?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not <audio>: {:?}", BG_MUSIC_ID, e))?;
    audio.set_volume(volume);

    let music = BackgroundMusic {
        document: document.clone(),
        audio,
        gate: Rc::new(RefCell::new(AutoplayGate::default())),
        retry: Rc::new(RefCell::new(None)),
    };

    let on_gesture = music.clone();
    let cb = Closure::wrap(Box::new(move || on_gesture.try_start()) as Box<dyn FnMut()>);
    for ev in RETRY_EVENTS {
        _ = document.add_event_listener_with_callback(ev, cb.as_ref().unchecked_ref());
    }
    *music.retry.borrow_mut() = Some(cb);

    music.try_start();
    Ok(())
}
