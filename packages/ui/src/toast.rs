//! Transient toast notifications.
//!
//! One context signal holds the visible stack; [`push_toast`] appends an
//! entry and spawns its dismissal a few seconds later. Mutation outcomes emit
//! exactly one toast each.

use dioxus::prelude::*;

const DISMISS_AFTER_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Warning => "toast toast-warning",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

/// Get the toast stack from context.
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

/// Show a toast and schedule its dismissal.
pub fn push_toast(stack: &mut Signal<ToastStack>, level: ToastLevel, message: &str) {
    let id = {
        let mut s = stack.write();
        s.next_id += 1;
        let id = s.next_id;
        s.toasts.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    let mut stack = *stack;
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;

        stack.write().toasts.retain(|t| t.id != id);
    });
}

/// Provider component holding the toast stack.
/// Wrap the app with this and place a [`ToastHost`] somewhere in the layout.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(ToastStack::default()));

    rsx! {
        {children}
    }
}

/// Renders the visible toasts in a fixed stack.
#[component]
pub fn ToastHost() -> Element {
    let stack = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            style: "position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 3000;",
            for toast in stack().toasts {
                div {
                    key: "{toast.id}",
                    class: "{toast.level.class()}",
                    "{toast.message}"
                }
            }
        }
    }
}
