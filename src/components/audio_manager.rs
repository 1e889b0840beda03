//! Audio Manager - drives the page's single `<audio>` element from the sequencer
//! and feeds the element's events back into it, outside the render cycle.

use dioxus::core::{Runtime, ScopeId};
use dioxus::prelude::*;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::components::StatusSignal;
#[cfg(target_arch = "wasm32")]
use crate::playback::{media_error_message, PlaybackEvent, Progress, Sequencer, SequencerOutcome};
#[cfg(target_arch = "wasm32")]
use dioxus::core::current_scope_id;
#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::{debug, error, info};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

/// Runs a DOM callback inside the scope of the component that registered it.
/// A runtime guard alone leaves the scope stack empty, and `spawn` needs an owner.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn in_component_scope<O>(runtime: &Rc<Runtime>, scope: ScopeId, f: impl FnOnce() -> O) -> O {
    runtime.in_scope(scope, f)
}

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "faithflow-audio";

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    // Stream instead of buffering whole files up front.
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
fn buffered_end(audio: &HtmlAudioElement) -> f64 {
    let ranges = audio.buffered();
    match ranges.length() {
        0 => 0.0,
        len => ranges.end(len - 1).unwrap_or(0.0),
    }
}

#[cfg(target_arch = "wasm32")]
fn read_progress(audio: &HtmlAudioElement) -> Option<Progress> {
    match Progress::from_media(audio.current_time(), audio.duration(), buffered_end(audio)) {
        Ok(progress) => Some(progress),
        Err(err) => {
            debug!(error = %err, "skipping progress report");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn dispatch(mut sequencer: Signal<Sequencer>, status: StatusSignal, event: PlaybackEvent) {
    let outcome = sequencer.write().on_event(event);
    match outcome {
        SequencerOutcome::Advanced(track) => info!(title = %track.title, "auto-advanced"),
        SequencerOutcome::Finished => debug!("playback reached the end"),
        SequencerOutcome::Failed(err) => {
            error!(error = %err, "playback failed");
            status.error(err.to_string());
        }
        SequencerOutcome::Updated | SequencerOutcome::Unchanged => {}
    }
}

#[cfg(target_arch = "wasm32")]
fn on_media_event(
    audio: &HtmlAudioElement,
    event: &str,
    runtime: Rc<Runtime>,
    scope: ScopeId,
    mut handler: impl FnMut(&HtmlAudioElement) + 'static,
) {
    let target = audio.clone();
    let closure = Closure::wrap(Box::new(move || {
        in_component_scope(&runtime, scope, || handler(&target));
    }) as Box<dyn FnMut()>);
    let _ = audio.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(target_arch = "wasm32")]
fn start_playback(audio: &HtmlAudioElement, sequencer: Signal<Sequencer>, status: StatusSignal) {
    let Ok(promise) = audio.play() else {
        return;
    };
    spawn(async move {
        let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await else {
            return;
        };
        let name = js_sys::Reflect::get(&err, &"name".into())
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default();
        // Switching sources aborts the pending play; only autoplay blocking needs handling.
        if name == "NotAllowedError" {
            dispatch(sequencer, status, PlaybackEvent::Pause);
            status.info("Press play to start listening.");
        } else {
            debug!(%name, "play request interrupted");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    rsx! {}
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let sequencer = use_context::<Signal<Sequencer>>();
    let status = use_context::<StatusSignal>();
    let mut last_src = use_signal(|| None::<String>);

    // Wire element events into the sequencer
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        let runtime = Runtime::current();
        let scope = current_scope_id();

        // End of track is reported by `ended` alone, so a final `timeupdate` at
        // full duration cannot advance twice.
        for event in ["timeupdate", "progress"] {
            on_media_event(&audio, event, runtime.clone(), scope, move |audio| {
                match read_progress(audio) {
                    Some(progress) if !progress.is_complete() && !audio.ended() => {
                        dispatch(sequencer, status, PlaybackEvent::Progress(progress));
                    }
                    _ => {}
                }
            });
        }

        on_media_event(&audio, "ended", runtime.clone(), scope, move |audio| {
            if audio.ended() {
                let progress = Progress::completed(audio.duration());
                dispatch(sequencer, status, PlaybackEvent::Progress(progress));
            }
        });

        on_media_event(&audio, "play", runtime.clone(), scope, move |_| {
            dispatch(sequencer, status, PlaybackEvent::Play);
        });

        on_media_event(&audio, "pause", runtime.clone(), scope, move |audio| {
            if !audio.ended() {
                dispatch(sequencer, status, PlaybackEvent::Pause);
            }
        });

        on_media_event(&audio, "error", runtime, scope, move |audio| {
            if sequencer.peek().current_track().is_none() {
                return;
            }
            let message = audio
                .error()
                .map(|err| media_error_message(err.code()))
                .unwrap_or_else(|| media_error_message(0));
            dispatch(sequencer, status, PlaybackEvent::Error(message));
        });
    });

    // Swap the source when the loaded track changes
    use_effect(move || {
        let url = sequencer.read().current_track().map(|track| track.url.clone());
        if url == *last_src.peek() {
            return;
        }
        last_src.set(url.clone());

        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        match url {
            Some(url) => {
                audio.set_src(&url);
                if sequencer.peek().is_playing() {
                    start_playback(&audio, sequencer, status);
                }
            }
            None => {
                let _ = audio.remove_attribute("src");
                audio.load();
            }
        }
    });

    // Follow the play/pause intent
    use_effect(move || {
        let playing = sequencer.read().is_playing();
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        if playing {
            if audio.paused() {
                start_playback(&audio, sequencer, status);
            }
        } else if !audio.paused() {
            let _ = audio.pause();
        }
    });

    rsx! {}
}
