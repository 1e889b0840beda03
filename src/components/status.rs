//! Transient status line for listing and playback failures.

use dioxus::prelude::*;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STATUS_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub id: u64,
    pub kind: StatusKind,
    pub text: String,
}

/// The visible message plus a counter that never rewinds, so an expiry timer
/// can only ever remove the message it was started for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusSlot {
    current: Option<StatusMessage>,
    issued: u64,
}

impl StatusSlot {
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn show(&mut self, kind: StatusKind, text: String) -> u64 {
        self.issued += 1;
        self.current = Some(StatusMessage {
            id: self.issued,
            kind,
            text,
        });
        self.issued
    }

    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clears the slot if message `id` is still the one showing.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().map(|m| m.id) != Some(id) {
            return false;
        }
        self.current = None;
        true
    }
}

#[derive(Clone, Copy)]
pub struct StatusSignal(pub Signal<StatusSlot>);

impl StatusSignal {
    pub fn info(&self, text: impl Into<String>) {
        self.show(StatusKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(StatusKind::Error, text.into());
    }

    pub fn clear(&self) {
        let mut signal = self.0;
        if signal.peek().current().is_some() {
            signal.write().clear();
        }
    }

    fn show(&self, kind: StatusKind, text: String) {
        let mut signal = self.0;
        let id = signal.write().show(kind, text);

        #[cfg(target_arch = "wasm32")]
        {
            use gloo_timers::future::TimeoutFuture;
            spawn(async move {
                TimeoutFuture::new(STATUS_TIMEOUT_MS).await;
                signal.write().expire(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

#[component]
pub fn StatusToast() -> Element {
    let status = use_context::<StatusSignal>();
    let Some(message) = status.0.read().current().cloned() else {
        return rsx! {};
    };

    let class = match message.kind {
        StatusKind::Info => "fixed bottom-28 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-xl bg-zinc-800 text-zinc-100 shadow-lg",
        StatusKind::Error => "fixed bottom-28 left-1/2 -translate-x-1/2 z-50 px-4 py-2 rounded-xl bg-red-900/90 text-red-100 shadow-lg",
    };

    rsx! {
        div { class: "{class}", role: "status",
            span { "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wider opacity-70 hover:opacity-100",
                onclick: move |_| status.clear(),
                "Dismiss"
            }
        }
    }
}
