//! Transient notifications.
//!
//! [`ToastProvider`] owns the queue and renders the stack; [`use_toast`] hands
//! out a `Copy` handle for raising toasts from event handlers. Each toast
//! dismisses itself after its duration unless the duration is zero.

use std::fmt;
use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastOptions {
    description: Option<String>,
    duration: Option<Duration>,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the provider's default. `Duration::ZERO` keeps the toast until closed.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    pub duration: Duration,
}

/// The visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Upper bound on visible toasts; the oldest is dropped first.
    pub const MAX_VISIBLE: usize = 5;

    pub const VALIDATION_FAILED: &'static str = "Validation Failed";

    pub fn push(
        &mut self,
        kind: ToastKind,
        title: String,
        options: ToastOptions,
        default_duration: Duration,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title,
            description: options.description,
            duration: options.duration.unwrap_or(default_duration),
        });
        if self.toasts.len() > Self::MAX_VISIBLE {
            self.toasts.remove(0);
        }
        id
    }

    /// A client-side validation failure, with the failure as the description.
    pub fn push_invalid(&mut self, error: &dyn fmt::Display, default_duration: Duration) -> u64 {
        self.push(
            ToastKind::Error,
            Self::VALIDATION_FAILED.to_string(),
            ToastOptions::new().description(error.to_string()),
            default_duration,
        )
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for raising toasts.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
    default_duration: Duration,
}

impl Toasts {
    pub fn success(&self, title: String, options: ToastOptions) {
        self.show(ToastKind::Success, title, options);
    }

    pub fn error(&self, title: String, options: ToastOptions) {
        tracing::debug!(%title, "error toast");
        self.show(ToastKind::Error, title, options);
    }

    pub fn invalid(&self, error: impl fmt::Display) {
        let mut queue = self.queue;
        queue.write().push_invalid(&error, self.default_duration);
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    fn show(&self, kind: ToastKind, title: String, options: ToastOptions) {
        let mut queue = self.queue;
        queue
            .write()
            .push(kind, title, options, self.default_duration);
    }
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(#[props(default = 5)] duration_secs: u32, children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toasts = use_context_provider(|| Toasts {
        queue,
        default_duration: Duration::from_secs(u64::from(duration_secs)),
    });

    rsx! {
        {children}
        div {
            class: "toast-region",
            role: "status",
            for toast in queue.read().toasts().iter().cloned() {
                ToastItem { key: "{toast.id}", toast, toasts }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts) -> Element {
    let id = toast.id;
    let duration = toast.duration;

    use_hook(move || {
        if duration.is_zero() {
            return;
        }
        spawn(async move {
            sleep(duration).await;
            toasts.dismiss(id);
        });
    });

    rsx! {
        div {
            class: "{toast.kind.class()}",
            span {
                class: "toast__icon",
                match toast.kind {
                    ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
                    ToastKind::Error => rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } },
                }
            }
            div {
                class: "toast__body",
                div { class: "toast__title", "{toast.title}" }
                if let Some(description) = &toast.description {
                    div { class: "toast__description", "{description}" }
                }
            }
            button {
                class: "toast__close",
                r#type: "button",
                aria_label: "Close",
                onclick: move |_| toasts.dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

// Outside the browser toasts stay until closed.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep(_duration: Duration) {
    std::future::pending::<()>().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: Duration = Duration::from_secs(5);

    #[test]
    fn test_push_uses_default_duration_and_fresh_ids() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Notice Created".into(), ToastOptions::new(), FIVE);
        let b = queue.push(
            ToastKind::Error,
            "Login Failed".into(),
            ToastOptions::new().description("Invalid credentials. Please try again."),
            FIVE,
        );
        assert_ne!(a, b);
        assert_eq!(queue.toasts()[0].duration, FIVE);
        assert_eq!(
            queue.toasts()[1].description.as_deref(),
            Some("Invalid credentials. Please try again.")
        );
    }

    #[test]
    fn test_validation_failure_keeps_error_as_description() {
        let mut queue = ToastQueue::default();
        queue.push_invalid(&store::FormError::InvalidMobile, FIVE);
        let toast = &queue.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Validation Failed");
        assert_eq!(
            toast.description.as_deref(),
            Some("Please enter a valid mobile number")
        );
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a".into(), ToastOptions::new(), FIVE);
        let b = queue.push(ToastKind::Success, "b".into(), ToastOptions::new(), FIVE);
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[test]
    fn test_oldest_is_dropped_past_capacity() {
        let mut queue = ToastQueue::default();
        for i in 0..=ToastQueue::MAX_VISIBLE {
            queue.push(ToastKind::Success, format!("t{i}"), ToastOptions::new(), FIVE);
        }
        assert_eq!(queue.toasts().len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(queue.toasts()[0].title, "t1");
    }

    #[test]
    fn test_explicit_duration_wins() {
        let mut queue = ToastQueue::default();
        queue.push(
            ToastKind::Error,
            "x".into(),
            ToastOptions::new().duration(Duration::ZERO),
            FIVE,
        );
        assert!(queue.toasts()[0].duration.is_zero());
    }
}
