use crate::api::Catalog;
use crate::components::actions::spawn_load_sections;
use crate::components::{Icon, StatusSignal};
use crate::gate::{AgreementCheck, Gate};
use crate::library::Library;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

/// First screen of every session. Browsing stays locked until the visitor agrees.
#[component]
pub fn AgreementScreen() -> Element {
    let mut gate = use_context::<Signal<Gate>>();
    let check = use_context::<AgreementCheck>();
    let catalog = use_context::<Catalog>();
    let library = use_context::<Signal<Library>>();
    let status = use_context::<StatusSignal>();
    let mut confirming = use_signal(|| false);

    let on_agree = move |_: MouseEvent| {
        if confirming() {
            return;
        }
        confirming.set(true);
        let check = check.clone();
        let catalog = catalog.clone();
        spawn(async move {
            let result = check.confirm().await;
            confirming.set(false);
            match result {
                Ok(()) => {
                    if gate.write().open() {
                        info!("agreement accepted");
                        spawn_load_sections(catalog, library, status);
                    }
                }
                Err(err) => status.error(err.to_string()),
            }
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-4",
            div { class: "text-center max-w-md",
                h1 { class: "text-4xl font-bold mb-4",
                    "Welcome to FaithFlow, Faithful Frequencies Music App"
                }
                p { class: "mb-6 text-zinc-300", "A free-to-use music platform. No sign-up required." }
                div { class: "bg-zinc-800/60 p-6 rounded-2xl border border-zinc-700/40 mb-6",
                    h2 { class: "text-xl font-semibold mb-2", "User Agreement" }
                    p { class: "text-sm text-zinc-400 mb-4",
                        "By proceeding, you agree that you will not copy, download, or distribute any music created by Faithful Frequencies without explicit consent from Moore Innovations."
                    }
                    button {
                        class: "px-4 py-2 rounded-xl bg-emerald-600 hover:bg-emerald-500 text-white font-semibold transition-colors inline-flex items-center gap-2",
                        disabled: confirming(),
                        onclick: on_agree,
                        if confirming() {
                            Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                        }
                        "I Agree"
                    }
                }
            }
        }
    }
}
