//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_api, use_auth, use_session_store, AppSessionStore, AuthProvider, LogoutButton, SessionSignal};

mod header;
pub use header::Header;

mod loading;
pub use loading::{use_loading, Loading, LoadingCounter, LoadingProvider, PageLoader};

pub use components::{
    use_toast, Button, ButtonSize, ButtonVariant, ConfirmDialog, Field, Input, Label, ModalOverlay,
    Pager, TextArea, ToastOptions, ToastProvider, Toasts, UploadField,
};
