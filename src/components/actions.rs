//! Spawns catalog requests and folds their results back into the library.

use crate::api::{Catalog, CatalogLister};
use crate::components::StatusSignal;
use crate::library::{Library, SelectOutcome};
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

pub fn spawn_load_sections(catalog: Catalog, mut library: Signal<Library>, status: StatusSignal) {
    let request = library.write().begin_sections();
    spawn(async move {
        let result = catalog.list_sections().await;
        let outcome = library.write().finish_sections(request, result);
        match outcome {
            SelectOutcome::Applied => {
                info!(count = library.peek().sections().len(), "sections loaded");
            }
            SelectOutcome::Failed(err) => {
                status.error(format!("Could not load sections: {err}"));
            }
            SelectOutcome::Stale => {}
        }
    });
}

pub fn spawn_select_section(
    catalog: Catalog,
    mut library: Signal<Library>,
    status: StatusSignal,
    name: String,
) {
    let request = library.write().begin_select(name.clone());
    spawn(async move {
        let result = catalog.list_tracks(&name).await;
        let outcome = library.write().finish_select(request, result);
        match outcome {
            SelectOutcome::Applied => {
                info!(section = %name, "section selected");
                status.clear();
            }
            SelectOutcome::Failed(err) => {
                status.error(format!("Could not open {name}: {err}"));
            }
            SelectOutcome::Stale => {}
        }
    });
}
