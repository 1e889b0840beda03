use crate::playback::Sequencer;
use dioxus::prelude::*;

mod controls;

use controls::{PlayPauseButton, ProgressBar};

/// Sticky "now playing" bar.
#[component]
pub fn Player() -> Element {
    let sequencer = use_context::<Signal<Sequencer>>();

    let state = sequencer.read().state().clone();
    let has_track = state.current_track.is_some();
    let title = state
        .current_track
        .map(|track| track.title)
        .unwrap_or_else(|| "No song selected".to_string());
    let progress = state.progress;

    rsx! {
        div { class: "sticky top-0 z-10 bg-zinc-950/90 backdrop-blur-xl border-b border-zinc-800/60 py-4 mb-6",
            div { class: "flex items-center gap-4",
                PlayPauseButton {}
                div { class: "flex-1 min-w-0",
                    p { class: "text-sm text-zinc-400", "Now Playing" }
                    p { class: "font-medium truncate", "{title}" }
                    if has_track {
                        ProgressBar { progress }
                    }
                }
            }
        }
    }
}
