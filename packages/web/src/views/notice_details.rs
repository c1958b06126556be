use dioxus::prelude::*;
use store::time::display_date_time;
use store::{Notice, Permission};
use ui::components::{Button, ButtonVariant, ConfirmDialog};
use ui::icons::{FaArrowLeft, FaFilePdf, FaPen, FaTrash};
use ui::{use_api, use_auth, use_loading, use_toast, Icon, ToastOptions};

use crate::Route;

#[component]
pub fn NoticeDetails(id: String) -> Element {
    let api = use_api();
    let session = use_auth();
    let loading = use_loading();
    let toast = use_toast();
    let nav = use_navigator();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut confirm_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let _loader = use_resource({
        let api = api.clone();
        let id = id.clone();
        move || {
            let api = api.clone();
            let id = id.clone();
            async move {
                match loading.track(api.notice(&id)).await {
                    Ok(found) => notice.set(Some(found)),
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

    let handle_delete = {
        let id = id.clone();
        move |_| {
            let api = api.clone();
            let id = id.clone();
            async move {
                deleting.set(true);
                let result = loading.track(api.delete_notice(&id)).await;
                deleting.set(false);
                confirm_delete.set(false);
                match result {
                    Ok(()) => {
                        toast.success("Notice Deleted".to_string(), ToastOptions::new());
                        nav.replace(Route::NoticeBoard {});
                    }
                    Err(e) => toast.error(
                        "Delete Failed".to_string(),
                        ToastOptions::new().description(e.user_message("The notice could not be deleted.")),
                    ),
                }
            }
        }
    };

    let session = session.read();
    let can_edit = session.check_permission(Permission::EditNotice);
    let can_delete = session.check_permission(Permission::DeleteNotice);

    let Some(notice) = notice.read().clone() else {
        return rsx! {};
    };
    let category = notice.category;

    rsx! {
        section {
            class: "page page--narrow",
            Link {
                to: Route::NoticeBoard {},
                class: "back-link",
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " Back to Notice Board"
            }

            article {
                class: "notice",
                div {
                    class: "notice__header",
                    h1 { class: "notice__title", "{notice.title}" }
                    div {
                        class: "notice__actions",
                        if can_edit {
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let id = id.clone();
                                    move |_| {
                                        nav.push(Route::EditNotice { id: id.clone() });
                                    }
                                },
                                Icon { icon: FaPen, width: 12, height: 12 }
                                span { "Edit" }
                            }
                        }
                        if can_delete {
                            Button {
                                variant: ButtonVariant::Destructive,
                                onclick: move |_| confirm_delete.set(true),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                span { "Delete" }
                            }
                        }
                    }
                }
                div {
                    class: "notice__meta",
                    span {
                        class: "badge",
                        style: "background-color: {category.color()}",
                        "{category.label()}"
                    }
                    span { "Posted on {display_date_time(&notice.created_at)}" }
                    if !notice.created_by.is_empty() {
                        span { "by {notice.created_by}" }
                    }
                }
                if let Some(url) = notice.image() {
                    img { class: "notice__image", src: "{url}", alt: "{notice.title}" }
                }
                div { class: "notice__content", "{notice.content}" }
                if let Some(pdf) = notice.pdf() {
                    a {
                        class: "notice__attachment",
                        href: "{pdf.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { icon: FaFilePdf, width: 14, height: 14 }
                        if pdf.filename.is_empty() { " View attachment" } else { " {pdf.filename}" }
                    }
                }
            }
        }

        if confirm_delete() {
            ConfirmDialog {
                title: "Delete notice",
                message: "Are you sure you want to delete this notice?",
                confirm_label: "Delete",
                cancel_label: "Cancel",
                busy: deleting(),
                on_confirm: handle_delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}
