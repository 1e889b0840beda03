use crate::api::Track;
use crate::components::Icon;
use crate::playback::Sequencer;
use dioxus::prelude::*;

#[component]
pub fn PlaylistView() -> Element {
    let mut sequencer = use_context::<Signal<Sequencer>>();

    let entries = sequencer.read().playlist().to_vec();
    let current = sequencer.read().current_track().cloned();
    let current_outside_playlist = current
        .as_ref()
        .map(|track| sequencer.read().playlist_position(track).is_none())
        .unwrap_or(false);

    let on_clear = move |_: MouseEvent| sequencer.write().clear_playlist();

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                div {
                    h3 { class: "text-lg font-semibold", "Playlist" }
                    p { class: "text-sm text-zinc-500", "{entries.len()} songs" }
                }
                if !entries.is_empty() {
                    button {
                        class: "px-4 py-2 rounded-xl bg-zinc-800 hover:bg-zinc-700 text-zinc-300 hover:text-white transition-colors flex items-center gap-2",
                        onclick: on_clear,
                        Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                        "Clear Playlist"
                    }
                }
            }

            if entries.is_empty() {
                div { class: "flex flex-col items-center justify-center py-16",
                    Icon { name: "playlist".to_string(), class: "w-12 h-12 text-zinc-600 mb-4".to_string() }
                    p { class: "text-zinc-400", "Your playlist is empty" }
                    p { class: "text-zinc-500 text-sm mt-2",
                        "Add songs from a section to play them back to back"
                    }
                }
            } else {
                if current_outside_playlist {
                    p { class: "text-xs text-zinc-500",
                        "The loaded song is not in the playlist, so playback stops when it ends."
                    }
                }
                ol { class: "bg-zinc-800/30 rounded-2xl border border-zinc-700/30 overflow-hidden divide-y divide-zinc-800/50",
                    for (idx , track) in entries.into_iter().enumerate() {
                        PlaylistRow { key: "{track.url}", index: idx, track }
                    }
                }
            }
        }
    }
}

#[component]
fn PlaylistRow(index: usize, track: Track) -> Element {
    let mut sequencer = use_context::<Signal<Sequencer>>();
    let is_current = sequencer.read().is_current(&track);
    let is_playing = is_current && sequencer.read().is_playing();

    let load_track = track.clone();
    let play_track = track.clone();
    let remove_track = track.clone();

    rsx! {
        li {
            class: if is_current { "p-3 bg-emerald-500/5 flex items-center justify-between" } else { "p-3 hover:bg-zinc-700/30 transition-colors flex items-center justify-between group cursor-pointer" },
            onclick: move |_| {
                if !sequencer.read().is_current(&load_track) {
                    sequencer.write().load_track(load_track.clone());
                }
            },
            div { class: "flex items-center gap-4 overflow-hidden",
                div { class: "w-8 text-center text-sm flex-shrink-0",
                    if is_playing {
                        Icon { name: "music".to_string(), class: "w-4 h-4 text-emerald-400 mx-auto".to_string() }
                    } else {
                        span { class: "text-zinc-500", "{index + 1}" }
                    }
                }
                p { class: if is_current { "text-emerald-400 font-medium truncate" } else { "text-zinc-300 truncate group-hover:text-white" },
                    "{track.title}"
                }
            }
            div { class: "flex items-center gap-2",
                button {
                    class: "p-2 text-zinc-400 hover:text-emerald-400 transition-colors",
                    title: "Play now",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        sequencer.write().play_now(play_track.clone());
                    },
                    Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                }
                button {
                    class: "p-2 text-zinc-500 hover:text-red-400 transition-colors",
                    title: "Remove from playlist",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        sequencer.write().remove_from_playlist(&remove_track);
                    },
                    Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
    }
}
