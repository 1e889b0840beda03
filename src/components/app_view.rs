//! Defines the shared application view state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppView {
    Library,
    Playlist,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Library => "Library",
        AppView::Playlist => "Playlist",
    }
}
