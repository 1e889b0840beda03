use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod gate;
mod library;
mod playback;

use components::AppShell;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "FaithFlow" }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#09090b" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "FaithFlow" }

        document::Script { src: TAILWIND_CDN }

        AppShell {}
    }
}
