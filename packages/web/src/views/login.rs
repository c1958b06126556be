//! Login page view with mobile number and password.

use dioxus::prelude::*;
use store::LoginForm;
use ui::components::{Button, ButtonVariant, Field, Input};
use ui::{use_api, use_loading, use_session_store, use_toast, ToastOptions};

use crate::Route;

/// Login page component.
///
/// A successful login only refreshes the session; the public layout then
/// moves the user on to `from`.
#[component]
pub fn Login(from: String) -> Element {
    let api = use_api();
    let store = use_session_store();
    let loading = use_loading();
    let toast = use_toast();
    let mut mobile_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let mut store = store.clone();
        async move {
            let form = LoginForm {
                mobile_number: mobile_number(),
                password: password(),
            };
            let credentials = match form.validate() {
                Ok(credentials) => credentials,
                Err(e) => {
                    toast.invalid(e);
                    return;
                }
            };

            submitting.set(true);
            let result = loading.track(api.login(&credentials)).await;
            match result {
                Ok(()) => {
                    toast.success("Login successful!".to_string(), ToastOptions::new());
                    store.refresh().await;
                }
                Err(e) => {
                    toast.error(
                        "Login Failed".to_string(),
                        ToastOptions::new()
                            .description(e.user_message("Invalid credentials. Please try again.")),
                    );
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { class: "auth-card__title", "Society Management" }
            p { class: "auth-card__subtitle", "Sign in to your account" }

            form {
                class: "form",
                onsubmit: handle_login,

                Field {
                    label: "Mobile Number",
                    html_for: "mobile_number",
                    required: true,
                    Input {
                        id: "mobile_number",
                        r#type: "tel",
                        placeholder: "Enter your mobile number",
                        value: mobile_number(),
                        oninput: move |e: FormEvent| mobile_number.set(e.value()),
                    }
                }
                Field {
                    label: "Password",
                    html_for: "password",
                    required: true,
                    Input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "form__submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Log in" }
                }
            }

            p {
                class: "auth-card__footer",
                "Don't have an account? "
                Link { to: Route::Register { from: from.clone() }, "Register" }
            }
        }
    }
}
