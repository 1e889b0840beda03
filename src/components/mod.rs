//! The components module contains all shared components for our app.

pub mod actions;
mod agreement;
mod app;
mod app_view;
mod audio_manager;
mod icons;
mod navigation;
mod player;
mod status;
pub mod views;

pub use agreement::*;
pub use app::*;
pub use app_view::*;
pub use audio_manager::*;
pub use icons::*;
pub use navigation::*;
pub use player::*;
pub use status::*;
