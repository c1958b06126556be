use chrono::Local;
use dioxus::prelude::*;
use store::PreApprovalDraft;
use ui::components::{Button, ButtonVariant, Field, Input, TextArea};
use ui::{use_api, use_loading, use_toast, ToastOptions};

use crate::Route;

#[component]
pub fn CreatePreApproval() -> Element {
    rsx! {
        PreApprovalForm { id: None }
    }
}

#[component]
pub fn EditPreApproval(id: String) -> Element {
    rsx! {
        PreApprovalForm { id: Some(id) }
    }
}

#[component]
fn PreApprovalForm(#[props(!optional)] id: Option<String>) -> Element {
    let api = use_api();
    let loading = use_loading();
    let toast = use_toast();
    let nav = use_navigator();
    let mut draft = use_signal(PreApprovalDraft::default);
    let mut submitting = use_signal(|| false);

    let _loader = use_resource({
        let api = api.clone();
        let id = id.clone();
        move || {
            let api = api.clone();
            let id = id.clone();
            async move {
                let Some(id) = id else {
                    return;
                };
                match loading.track(api.pre_approval(&id)).await {
                    Ok(record) => draft.set(PreApprovalDraft::from_record(&record, &Local)),
                    Err(e) => {
                        toast.error(
                            "Failed to load pre-approval".to_string(),
                            ToastOptions::new().description(e.user_message("The pre-approval could not be found.")),
                        );
                        nav.replace(Route::PreApprovals {});
                    }
                }
            }
        }
    });

    let handle_submit = {
        let id = id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let id = id.clone();
            async move {
                let now = Local::now().naive_local();
                let payload = match draft.read().validate(now, &Local) {
                    Ok(payload) => payload,
                    Err(e) => {
                        toast.invalid(e);
                        return;
                    }
                };

                submitting.set(true);
                let result = match &id {
                    Some(id) => loading.track(api.update_pre_approval(id, &payload)).await,
                    None => loading.track(api.create_pre_approval(&payload)).await,
                };
                submitting.set(false);

                match result {
                    Ok(()) => {
                        let title = if id.is_some() {
                            "Pre-approval updated"
                        } else {
                            "Pre-approval created"
                        };
                        toast.success(title.to_string(), ToastOptions::new());
                        nav.replace(Route::PreApprovals {});
                    }
                    Err(e) => toast.error(
                        "Failed to save pre-approval".to_string(),
                        ToastOptions::new().description(e.user_message("Please try again.")),
                    ),
                }
            }
        }
    };

    let editing = id.is_some();
    let current = draft.read().clone();
    let earliest_arrival = Local::now().format("%Y-%m-%dT00:00").to_string();

    rsx! {
        section {
            class: "page page--narrow",
            h1 {
                class: "page__title",
                if editing { "Edit Pre-Approval" } else { "Create Pre-Approval" }
            }

            form {
                class: "form",
                onsubmit: handle_submit,

                Field {
                    label: "Visitor Name",
                    html_for: "visitor_name",
                    required: true,
                    Input {
                        id: "visitor_name",
                        placeholder: "Full name of the visitor",
                        value: current.visitor_name.clone(),
                        oninput: move |e: FormEvent| draft.write().visitor_name = e.value(),
                    }
                }
                Field {
                    label: "Apartment Number",
                    html_for: "apartment_number",
                    required: true,
                    Input {
                        id: "apartment_number",
                        placeholder: "e.g. A-101",
                        value: current.apartment_number.clone(),
                        oninput: move |e: FormEvent| draft.write().apartment_number = e.value(),
                    }
                }
                div {
                    class: "form__row",
                    Field {
                        label: "Arrival Time",
                        html_for: "arrival_time",
                        Input {
                            id: "arrival_time",
                            r#type: "datetime-local",
                            min: earliest_arrival,
                            value: current.arrival_time.clone(),
                            oninput: move |e: FormEvent| draft.write().arrival_time = e.value(),
                        }
                    }
                    Field {
                        label: "Departure Time",
                        html_for: "departure_time",
                        Input {
                            id: "departure_time",
                            r#type: "datetime-local",
                            min: current.arrival_time.clone(),
                            value: current.departure_time.clone(),
                            oninput: move |e: FormEvent| draft.write().departure_time = e.value(),
                        }
                    }
                }
                Field {
                    label: "Purpose",
                    html_for: "purpose",
                    TextArea {
                        id: "purpose",
                        placeholder: "Reason for the visit",
                        value: current.purpose.clone(),
                        oninput: move |e: FormEvent| draft.write().purpose = e.value(),
                    }
                }

                div {
                    class: "form__actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::PreApprovals {});
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if editing { "Update" } else { "Create" }
                    }
                }
            }
        }
    }
}
