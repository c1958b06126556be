//! Resident self-registration.

use dioxus::prelude::*;
use store::RegistrationForm;
use ui::components::{Button, ButtonVariant, Field, Input};
use ui::{use_api, use_loading, use_toast, ToastOptions};

use crate::Route;

/// Register page component.
#[component]
pub fn Register(from: String) -> Element {
    let api = use_api();
    let loading = use_loading();
    let toast = use_toast();
    let nav = use_navigator();
    let mut apartment_number = use_signal(String::new);
    let mut mobile_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let from_for_submit = from.clone();
    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let from = from_for_submit.clone();
        async move {
            let form = RegistrationForm {
                apartment_number: apartment_number(),
                mobile_number: mobile_number(),
                password: password(),
                confirm_password: confirm_password(),
            };
            let registration = match form.validate() {
                Ok(registration) => registration,
                Err(e) => {
                    toast.invalid(e);
                    return;
                }
            };

            submitting.set(true);
            let result = loading.track(api.register_resident(&registration)).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    toast.success(
                        "Registration successful!".to_string(),
                        ToastOptions::new().description("You can now log in."),
                    );
                    nav.push(Route::Login { from });
                }
                Err(e) => {
                    toast.error(
                        "Registration Failed".to_string(),
                        ToastOptions::new()
                            .description(e.user_message("Registration failed. Please try again.")),
                    );
                }
            }
        }
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { class: "auth-card__title", "Society Management" }
            p { class: "auth-card__subtitle", "Register as a resident" }

            form {
                class: "form",
                onsubmit: handle_register,

                Field {
                    label: "Apartment Number",
                    html_for: "apartment_number",
                    required: true,
                    Input {
                        id: "apartment_number",
                        placeholder: "e.g. A-101",
                        value: apartment_number(),
                        oninput: move |e: FormEvent| apartment_number.set(e.value()),
                    }
                }
                Field {
                    label: "Mobile Number",
                    html_for: "mobile_number",
                    required: true,
                    hint: "10 digits",
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
                    hint: "At least 8 characters",
                    Input {
                        id: "password",
                        r#type: "password",
                        value: password(),
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                }
                Field {
                    label: "Confirm Password",
                    html_for: "confirm_password",
                    required: true,
                    Input {
                        id: "confirm_password",
                        r#type: "password",
                        value: confirm_password(),
                        oninput: move |e: FormEvent| confirm_password.set(e.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    class: "form__submit",
                    disabled: submitting(),
                    if submitting() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "auth-card__footer",
                "Already have an account? "
                Link { to: Route::Login { from: from.clone() }, "Log in" }
            }
        }
    }
}
