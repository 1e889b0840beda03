use dioxus::prelude::*;

use crate::components::app_view::AppView;

/// The open tab and the one it was reached from. Going back is a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    current: AppView,
    previous: Option<AppView>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current: AppView::Library,
            previous: None,
        }
    }
}

impl ViewState {
    pub fn current(&self) -> AppView {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        self.previous.is_some()
    }

    /// Returns `false` when `target` is already open.
    pub fn open(&mut self, target: AppView) -> bool {
        if self.current == target {
            return false;
        }
        self.previous = Some(self.current);
        self.current = target;
        true
    }

    pub fn back(&mut self) -> Option<AppView> {
        let previous = self.previous.take()?;
        self.current = previous;
        Some(previous)
    }
}

/// Context handle over the shared [`ViewState`].
#[derive(Clone, Copy)]
pub struct Navigation(Signal<ViewState>);

impl Navigation {
    pub fn new(state: Signal<ViewState>) -> Self {
        Self(state)
    }

    pub fn current(&self) -> AppView {
        self.0.read().current()
    }

    pub fn can_go_back(&self) -> bool {
        self.0.read().can_go_back()
    }

    pub fn navigate_to(&self, target: AppView) {
        let mut state = self.0;
        if state.peek().current() != target {
            state.write().open(target);
        }
    }

    pub fn go_back(&self) -> Option<AppView> {
        let mut state = self.0;
        let previous = state.write().back();
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_library_with_nowhere_to_go_back() {
        let state = ViewState::default();
        assert_eq!(state.current(), AppView::Library);
        assert!(!state.can_go_back());
    }

    #[test]
    fn back_returns_to_the_previous_tab_once() {
        let mut state = ViewState::default();
        assert!(state.open(AppView::Playlist));
        assert_eq!(state.back(), Some(AppView::Library));
        assert_eq!(state.current(), AppView::Library);
        assert_eq!(state.back(), None);
    }

    #[test]
    fn reopening_the_current_tab_keeps_history() {
        let mut state = ViewState::default();
        state.open(AppView::Playlist);
        assert!(!state.open(AppView::Playlist));
        assert_eq!(state.back(), Some(AppView::Library));
    }
}
