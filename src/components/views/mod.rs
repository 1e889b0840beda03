mod library;
mod playlist;

pub use library::LibraryView;
pub use playlist::PlaylistView;
