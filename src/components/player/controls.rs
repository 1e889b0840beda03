use crate::api::format_duration;
use crate::components::Icon;
use crate::playback::{Progress, Sequencer};
use dioxus::prelude::*;

/// Play/pause for the loaded track; with nothing loaded it starts the playlist.
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut sequencer = use_context::<Signal<Sequencer>>();

    let playing = sequencer.read().is_playing();
    let can_toggle = sequencer.read().current_track().is_some()
        || !sequencer.read().playlist().is_empty();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            aria_label: if playing { "Pause" } else { "Play" },
            disabled: !can_toggle,
            class: "w-12 h-12 rounded-full bg-white text-zinc-900 flex items-center justify-center hover:scale-105 transition-transform disabled:opacity-40 disabled:hover:scale-100",
            onclick: move |_| {
                sequencer.write().toggle_play_pause();
            },
            if playing {
                Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "w-5 h-5 ml-0.5".to_string() }
            }
        }
    }
}

/// Played and buffered portions of the current track.
#[component]
pub(super) fn ProgressBar(progress: Progress) -> Element {
    let played = (progress.played_fraction * 100.0).clamp(0.0, 100.0);
    let loaded = (progress.loaded_fraction * 100.0).clamp(0.0, 100.0);
    let elapsed = format_duration(progress.played_seconds);
    let total = if progress.played_fraction > 0.0 {
        format_duration(progress.played_seconds / progress.played_fraction)
    } else {
        "--:--".to_string()
    };

    rsx! {
        div { class: "mt-2 flex items-center gap-3 text-xs text-zinc-500 font-mono",
            span { "{elapsed}" }
            div { class: "relative flex-1 h-1.5 rounded-full bg-zinc-800 overflow-hidden",
                div {
                    class: "absolute inset-y-0 left-0 bg-zinc-600",
                    style: "width: {loaded}%",
                }
                div {
                    class: "absolute inset-y-0 left-0 bg-emerald-500",
                    style: "width: {played}%",
                }
            }
            span { "{total}" }
        }
    }
}
