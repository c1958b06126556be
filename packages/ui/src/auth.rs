//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds the application's [`SessionStore`] over the
//! [`ApiClient`] found in context and a reactive [`Signal<Session>`], then runs
//! the initial identity check ([`SessionStore::start`]) on mount. Components read the session through
//! [`use_auth`] and mutate it only through the store.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{Session, SessionCell, SessionStore};

use crate::components::{use_toast, Button, ButtonVariant, ToastOptions, Toasts};
use crate::icons::FaRightFromBracket;
use crate::Icon;

/// [`SessionCell`] backed by a Dioxus signal, so every write re-renders readers.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionSignal(pub Signal<Session>);

impl SessionCell for SessionSignal {
    fn snapshot(&self) -> Session {
        self.0.peek().clone()
    }

    fn replace(&mut self, session: Session) {
        self.0.set(session);
    }
}

pub type AppSessionStore = SessionStore<ApiClient, SessionSignal>;

/// Get the current session.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// The single writer of the session.
pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>()
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages the session.
/// Must be mounted below a context providing the [`ApiClient`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(Session::initializing);
    use_context_provider(|| session);
    let api = use_api();
    let store = use_context_provider(|| AppSessionStore::new(api, SessionSignal(session)));

    // Same initial check as `SessionStore::init`, run once on mount
    let _ = use_resource(move || {
        let mut store = store.clone();
        async move {
            store.start().await;
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user. Disabled while the session is busy.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default)] class: String,
) -> Element {
    let session = use_auth();
    let store = use_session_store();
    let toast = use_toast();

    let onclick = move |_| {
        let mut store = store.clone();
        async move {
            if let Err(e) = store.logout().await {
                report_logout_failure(toast, &e);
            }
        }
    };

    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            class,
            disabled: session.read().is_loading(),
            onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

fn report_logout_failure(toast: Toasts, error: &ApiError) {
    tracing::debug!("logout failure surfaced to user: {error}");
    toast.error(
        "Logout Failed".to_string(),
        ToastOptions::new().description("There was a problem logging out. Please try again."),
    );
}
