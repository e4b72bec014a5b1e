//! Transient toast notifications.
//!
//! Best-effort visual feedback: no return values, no dedup, no queue limit.
//! Concurrent toasts stack independently and each one schedules its own
//! dismissal.

use dioxus::prelude::*;

use crate::core::{platform, timing};

/// How long a toast stays fully visible.
const DISPLAY_MS: u64 = 3000;
/// Exit-transition window before the element is dropped.
const EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#22c55e",
            Severity::Error => "#ef4444",
            Severity::Warning => "#f97316",
            Severity::Info => "#3b82f6",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    message: String,
    severity: Severity,
    exiting: bool,
}

/// Cloneable handle for pushing notifications from handlers and futures.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifier {
    /// Show a toast for the fixed display window, then let it slide out.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let mut toasts = self.toasts;
        let mut next_id = self.next_id;

        let id = next_id.with_mut(|n| {
            *n += 1;
            *n
        });
        toasts.with_mut(|list| {
            list.push(Toast {
                id,
                message: message.into(),
                severity,
                exiting: false,
            })
        });

        platform::spawn_future(async move {
            timing::sleep_ms(DISPLAY_MS).await;
            toasts.with_mut(|list| {
                if let Some(toast) = list.iter_mut().find(|toast| toast.id == id) {
                    toast.exiting = true;
                }
            });
            timing::sleep_ms(EXIT_MS).await;
            toasts.with_mut(|list| list.retain(|toast| toast.id != id));
        });
    }
}

/// Install the notifier in context. Call once from the platform shell, above
/// every view that notifies and above the [`NotificationArea`].
pub fn use_notifier_provider() -> Notifier {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Notifier { toasts, next_id })
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Fixed-position stack rendering the live toasts.
#[component]
pub fn NotificationArea() -> Element {
    let notifier = use_notifier();
    let toasts = (notifier.toasts)();

    rsx! {
        div { class: "notification-area",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: format!(
                        "notification notification-{}{}",
                        toast.severity.slug(),
                        if toast.exiting { " notification--exiting" } else { "" }
                    ),
                    style: "background: {toast.severity.color()};",
                    "{toast.message}"
                }
            }
        }
    }
}
