use crate::api::{Catalog, FirebaseStorage, StorageCatalog};
use crate::components::views::{LibraryView, PlaylistView};
use crate::components::{
    view_label, AgreementScreen, AppView, AudioController, Icon, Navigation, Player,
    StatusSignal, StatusSlot, StatusToast, ViewState,
};
use crate::config::AppConfig;
use crate::gate::{AgreementCheck, Gate};
use crate::library::Library;
use crate::playback::Sequencer;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

const SUPPORT_URL: &str = "https://square.link/u/kvmzA5fu";

/// Composition root: builds the storage client and every piece of shared state.
#[component]
pub fn AppShell() -> Element {
    let config = use_hook(AppConfig::from_env);
    let catalog: Catalog = use_hook(|| {
        info!(bucket = %config.bucket, root = %config.root, "connecting to storage");
        StorageCatalog::new(FirebaseStorage::new(&config), config.root.clone())
    });
    let check = use_hook(|| AgreementCheck::from_config(&config));

    let gate = use_signal(Gate::default);
    let library = use_signal(Library::default);
    let sequencer = use_signal(Sequencer::new);
    let status = StatusSignal(use_signal(StatusSlot::default));
    let navigation = Navigation::new(use_signal(ViewState::default));

    use_context_provider(|| catalog);
    use_context_provider(|| check);
    use_context_provider(|| gate);
    use_context_provider(|| library);
    use_context_provider(|| sequencer);
    use_context_provider(|| status);
    use_context_provider(|| navigation);

    let agreed = gate.read().is_open();

    rsx! {
        div { class: "app-container min-h-screen bg-zinc-950 text-white",
            if agreed {
                MainScreen {}
            } else {
                AgreementScreen {}
            }
            StatusToast {}
        }

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}

#[component]
fn MainScreen() -> Element {
    let navigation = use_context::<Navigation>();
    let sequencer = use_context::<Signal<Sequencer>>();
    let view = navigation.current();
    let playlist_len = sequencer.read().playlist().len();

    rsx! {
        div { class: "w-full max-w-4xl mx-auto px-4",
            Player {}

            nav { class: "flex items-center gap-2 mb-6",
                if navigation.can_go_back() {
                    button {
                        class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                        aria_label: "Go back",
                        onclick: move |_| {
                            let _ = navigation.go_back();
                        },
                        Icon { name: "arrow-left".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
                TabButton {
                    label: view_label(&AppView::Library).to_string(),
                    active: view == AppView::Library,
                    onclick: move |_| navigation.navigate_to(AppView::Library),
                }
                TabButton {
                    label: format!("{} ({playlist_len})", view_label(&AppView::Playlist)),
                    active: view == AppView::Playlist,
                    onclick: move |_| navigation.navigate_to(AppView::Playlist),
                }
            }

            match view {
                AppView::Library => rsx! { LibraryView {} },
                AppView::Playlist => rsx! { PlaylistView {} },
            }

            footer { class: "text-center my-10",
                p { class: "text-xl font-semibold mb-4", "Support Our Music!" }
                a {
                    href: SUPPORT_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "bg-sky-600 hover:bg-sky-500 text-white font-bold py-2 px-4 rounded-xl inline-block",
                    "Donate with Square"
                }
                p { class: "mt-2 text-sm text-zinc-400",
                    "Your generous contributions help us create more music and keep this platform free."
                }
            }
        }
    }
}

#[component]
fn TabButton(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if active { "px-4 py-2 rounded-xl bg-emerald-500/10 text-emerald-400 font-medium" } else { "px-4 py-2 rounded-xl text-zinc-400 hover:text-white hover:bg-zinc-800/60 transition-colors" },
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}
