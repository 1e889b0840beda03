use crate::api::{Catalog, Track};
use crate::components::actions::spawn_select_section;
use crate::components::{Icon, StatusSignal};
use crate::library::Library;
use crate::playback::Sequencer;
use dioxus::prelude::*;

#[component]
pub fn LibraryView() -> Element {
    let library = use_context::<Signal<Library>>();
    let catalog = use_context::<Catalog>();
    let status = use_context::<StatusSignal>();

    let sections = library.read().sections().to_vec();
    let selected = library.read().selected_section().map(str::to_string);
    let tracks = library.read().catalog().to_vec();
    let loading_sections = library.read().is_loading_sections();
    let loading_tracks = library.read().pending_section();
    let busy = library.read().is_loading();

    let heading = match &selected {
        Some(name) => format!("Songs in {name}"),
        None => "Select a section".to_string(),
    };

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 gap-8", aria_busy: busy,
            section {
                h3 { class: "text-lg font-semibold mb-3 flex items-center gap-2",
                    "Sections"
                    if loading_sections {
                        Icon { name: "loader".to_string(), class: "w-4 h-4 text-zinc-400".to_string() }
                    }
                }
                if sections.is_empty() && !loading_sections {
                    p { class: "text-sm text-zinc-500", "No sections available." }
                }
                ul { class: "space-y-1",
                    for name in sections {
                        {
                            let is_selected = selected.as_deref() == Some(name.as_str());
                            let catalog = catalog.clone();
                            let target = name.clone();
                            rsx! {
                                li {
                                    key: "{name}",
                                    class: if is_selected { "px-3 py-2 rounded-xl bg-emerald-500/10 text-emerald-400 cursor-pointer flex items-center gap-2" } else { "px-3 py-2 rounded-xl hover:bg-zinc-800/60 hover:text-emerald-400 cursor-pointer flex items-center gap-2" },
                                    onclick: move |_| {
                                        spawn_select_section(catalog.clone(), library, status, target.clone());
                                    },
                                    Icon { name: "folder".to_string(), class: "w-4 h-4".to_string() }
                                    span { "{name}" }
                                }
                            }
                        }
                    }
                }
            }

            section {
                h3 { class: "text-lg font-semibold mb-3 flex items-center gap-2",
                    "{heading}"
                    if loading_tracks {
                        Icon { name: "loader".to_string(), class: "w-4 h-4 text-zinc-400".to_string() }
                    }
                }
                if selected.is_some() && tracks.is_empty() {
                    p { class: "text-sm text-zinc-500", "This section has no songs yet." }
                }
                ul { class: "space-y-2",
                    for track in tracks {
                        CatalogRow { key: "{track.url}", track }
                    }
                }
            }
        }
    }
}

#[component]
fn CatalogRow(track: Track) -> Element {
    let mut sequencer = use_context::<Signal<Sequencer>>();
    let status = use_context::<StatusSignal>();

    let is_current = sequencer.read().is_current(&track);
    let in_playlist = sequencer.read().playlist_position(&track).is_some();

    let load_track = track.clone();
    let play_track = track.clone();
    let add_track = track.clone();

    rsx! {
        li { class: if is_current { "flex justify-between items-center p-2 rounded-xl bg-emerald-500/10 border border-emerald-500/20" } else { "flex justify-between items-center p-2 rounded-xl bg-zinc-800/50" },
            span { class: if is_current { "truncate text-emerald-400 font-medium" } else { "truncate text-zinc-200" },
                "{track.title}"
            }
            div { class: "flex items-center gap-2 flex-shrink-0",
                button {
                    class: "px-3 py-1 rounded-lg bg-zinc-700 hover:bg-zinc-600 text-sm",
                    title: "Load without playing",
                    onclick: move |_| sequencer.write().load_track(load_track.clone()),
                    "Load"
                }
                button {
                    class: "px-3 py-1 rounded-lg bg-emerald-600 hover:bg-emerald-500 text-sm inline-flex items-center gap-1",
                    onclick: move |_| sequencer.write().play_now(play_track.clone()),
                    Icon { name: "play".to_string(), class: "w-3 h-3".to_string() }
                    "Play"
                }
                button {
                    class: "px-3 py-1 rounded-lg bg-sky-600 hover:bg-sky-500 text-sm inline-flex items-center gap-1 disabled:opacity-50",
                    disabled: in_playlist,
                    onclick: move |_| {
                        if sequencer.write().add_to_playlist(add_track.clone()) {
                            status.info(format!("Added {} to the playlist", add_track.title));
                        }
                    },
                    if in_playlist {
                        Icon { name: "check".to_string(), class: "w-3 h-3".to_string() }
                        "In Playlist"
                    } else {
                        Icon { name: "plus".to_string(), class: "w-3 h-3".to_string() }
                        "Add to Playlist"
                    }
                }
            }
        }
    }
}
