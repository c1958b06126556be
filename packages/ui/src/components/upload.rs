//! Single-file picker bound to an [`UploadSlot`].
//!
//! Type and size are checked against [`UploadLimits`] before the file is read,
//! so an oversized pick never lands in memory. A rejected pick leaves the slot
//! as it was and raises an error toast.

use dioxus::prelude::*;
use store::{AttachmentKind, UploadLimits, UploadSlot};

use super::toast::{use_toast, ToastOptions};
use crate::icons::{FaFilePdf, FaImage, FaTrash, FaUpload};
use crate::Icon;

#[component]
pub fn UploadField(
    id: String,
    kind: AttachmentKind,
    slot: Signal<UploadSlot>,
    limits: UploadLimits,
    #[props(default)] disabled: bool,
) -> Element {
    let toast = use_toast();
    let mut slot = slot;

    let on_pick = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let mime = file.content_type().unwrap_or_default();

        if let Err(e) = limits.check(kind, &name, &mime, file.size()) {
            toast.error(e.to_string(), ToastOptions::new());
            return;
        }

        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                tracing::warn!(%name, "failed to read picked file: {e}");
                toast.error(format!("Could not read {name}"), ToastOptions::new());
                return;
            }
        };

        let mut next = slot.peek().clone();
        match next.select(kind, &limits, name, &mime, bytes) {
            Ok(()) => slot.set(next),
            Err(e) => toast.error(e.to_string(), ToastOptions::new()),
        }
    };

    let label = match kind {
        AttachmentKind::Image => "Select Image",
        AttachmentKind::Pdf => "Select PDF",
    };

    rsx! {
        div {
            class: "upload",
            label {
                class: "button button--outline upload__pick",
                r#for: "{id}",
                Icon { icon: FaUpload, width: 14, height: 14 }
                span { "{label}" }
            }
            input {
                id: "{id}",
                class: "upload__input",
                r#type: "file",
                accept: kind.accept(),
                multiple: false,
                disabled,
                onchange: on_pick,
            }
            match &*slot.read() {
                UploadSlot::Empty => rsx! {},
                UploadSlot::Existing { name, url } => rsx! {
                    div {
                        class: "upload__item",
                        match kind {
                            AttachmentKind::Image => rsx! {
                                img { class: "upload__preview", src: "{url}", alt: "Current image" }
                            },
                            AttachmentKind::Pdf => rsx! {
                                Icon { icon: FaFilePdf, width: 14, height: 14 }
                                a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "{name}" }
                            },
                        }
                        RemoveButton { disabled, on_remove: move |_| slot.write().clear() }
                    }
                },
                UploadSlot::Pending(file) => rsx! {
                    div {
                        class: "upload__item",
                        match kind {
                            AttachmentKind::Image => rsx! { Icon { icon: FaImage, width: 14, height: 14 } },
                            AttachmentKind::Pdf => rsx! { Icon { icon: FaFilePdf, width: 14, height: 14 } },
                        }
                        span { class: "upload__name", "{file.name}" }
                        RemoveButton { disabled, on_remove: move |_| slot.write().clear() }
                    }
                },
            }
        }
    }
}

#[component]
fn RemoveButton(disabled: bool, on_remove: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "upload__remove",
            r#type: "button",
            aria_label: "Remove file",
            disabled,
            onclick: move |_| on_remove.call(()),
            Icon { icon: FaTrash, width: 12, height: 12 }
        }
    }
}
