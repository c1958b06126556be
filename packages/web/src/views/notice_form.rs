//! Create and edit forms for notices. Both share [`NoticeForm`].

use dioxus::prelude::*;
use store::notice::NoticeCategory;
use store::{AttachmentKind, ClientConfig, NoticeDraft, UploadSlot};
use ui::components::{Button, ButtonVariant, Field, Input, TextArea, UploadField};
use ui::{use_api, use_loading, use_toast, ToastOptions};

use crate::Route;

const MIB: u64 = 1024 * 1024;

#[component]
pub fn CreateNotice() -> Element {
    rsx! {
        NoticeForm { id: None }
    }
}

#[component]
pub fn EditNotice(id: String) -> Element {
    rsx! {
        NoticeForm { id: Some(id) }
    }
}

#[component]
fn NoticeForm(#[props(!optional)] id: Option<String>) -> Element {
    let api = use_api();
    let config = use_context::<ClientConfig>();
    let loading = use_loading();
    let toast = use_toast();
    let nav = use_navigator();
    let mut draft = use_signal(NoticeDraft::default);
    let mut image = use_signal(UploadSlot::default);
    let mut pdf = use_signal(UploadSlot::default);
    let mut submitting = use_signal(|| false);
    let limits = config.uploads;

    // Prefill when editing
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
                match loading.track(api.notice(&id)).await {
                    Ok(notice) => {
                        let (stored_image, stored_pdf) = UploadSlot::from_notice(&notice);
                        draft.set(NoticeDraft::from_notice(&notice));
                        image.set(stored_image);
                        pdf.set(stored_pdf);
                    }
                    Err(e) => {
                        toast.error(
                            "Failed to load notice".to_string(),
                            ToastOptions::new().description(e.user_message("The notice could not be found.")),
                        );
                        nav.replace(Route::NoticeBoard {});
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
                let fields = match draft.read().validate() {
                    Ok(fields) => fields,
                    Err(e) => {
                        toast.invalid(e);
                        return;
                    }
                };
                let image = image.peek().clone();
                let pdf = pdf.peek().clone();

                submitting.set(true);
                let result = match &id {
                    Some(id) => loading.track(api.update_notice(id, &fields, &image, &pdf)).await,
                    None => loading.track(api.create_notice(&fields, &image, &pdf)).await,
                };
                submitting.set(false);

                match (result, id) {
                    (Ok(()), Some(id)) => {
                        toast.success("Notice Updated".to_string(), ToastOptions::new());
                        nav.replace(Route::NoticeDetails { id });
                    }
                    (Ok(()), None) => {
                        toast.success("Notice Created".to_string(), ToastOptions::new());
                        nav.replace(Route::NoticeBoard {});
                    }
                    (Err(e), _) => toast.error(
                        "Failed to save notice".to_string(),
                        ToastOptions::new().description(e.user_message("Please try again.")),
                    ),
                }
            }
        }
    };

    let editing = id.is_some();
    let back = match &id {
        Some(id) => Route::NoticeDetails { id: id.clone() },
        None => Route::NoticeBoard {},
    };
    let current = draft.read().clone();
    let image_hint = format!("JPG, PNG or GIF, smaller than {}MB", limits.image_max_bytes / MIB);
    let pdf_hint = format!("PDF, smaller than {}MB", limits.pdf_max_bytes / MIB);

    rsx! {
        section {
            class: "page page--narrow",
            h1 { class: "page__title", if editing { "Edit Notice" } else { "Create Notice" } }

            form {
                class: "form",
                onsubmit: handle_submit,

                Field {
                    label: "Title",
                    html_for: "title",
                    required: true,
                    Input {
                        id: "title",
                        placeholder: "Notice title",
                        value: current.title.clone(),
                        oninput: move |e: FormEvent| draft.write().title = e.value(),
                    }
                }
                Field {
                    label: "Category",
                    html_for: "category",
                    required: true,
                    select {
                        id: "category",
                        class: "input",
                        value: "{current.category}",
                        onchange: move |e| draft.write().category = e.value(),
                        option { value: "", disabled: true, selected: current.category.is_empty(), "Select a category" }
                        for category in NoticeCategory::ALL {
                            option {
                                value: "{category.as_str()}",
                                selected: current.category == category.as_str(),
                                "{category.label()}"
                            }
                        }
                    }
                }
                Field {
                    label: "Content",
                    html_for: "content",
                    required: true,
                    TextArea {
                        id: "content",
                        rows: 8,
                        placeholder: "What do residents need to know?",
                        value: current.content.clone(),
                        oninput: move |e: FormEvent| draft.write().content = e.value(),
                    }
                }
                Field {
                    label: "Image",
                    html_for: "image",
                    hint: image_hint,
                    UploadField { id: "image", kind: AttachmentKind::Image, slot: image, limits, disabled: submitting() }
                }
                Field {
                    label: "PDF Attachment",
                    html_for: "pdf",
                    hint: pdf_hint,
                    UploadField { id: "pdf", kind: AttachmentKind::Pdf, slot: pdf, limits, disabled: submitting() }
                }

                div {
                    class: "form__actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(back.clone());
                        },
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if editing { "Update Notice" } else { "Create Notice" }
                    }
                }
            }
        }
    }
}
