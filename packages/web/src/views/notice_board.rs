use dioxus::prelude::*;
use store::time::display_date;
use store::{CategoryFilter, Notice, NoticeFilters, Permission};
use ui::components::{Button, ButtonVariant, Input};
use ui::icons::{FaMagnifyingGlass, FaPaperclip, FaPlus};
use ui::{use_api, use_auth, use_loading, use_toast, Icon, ToastOptions};

use crate::Route;

#[component]
pub fn NoticeBoard() -> Element {
    let api = use_api();
    let session = use_auth();
    let loading = use_loading();
    let toast = use_toast();
    let nav = use_navigator();
    let mut filters = use_signal(NoticeFilters::default);
    let mut search_input = use_signal(String::new);

    // Refetch whenever the filters change
    let notices = use_resource(move || {
        let api = api.clone();
        let filters = filters();
        async move {
            match loading.track(api.notices(&filters)).await {
                Ok(notices) => notices,
                Err(e) => {
                    toast.error(
                        "Failed to load notices".to_string(),
                        ToastOptions::new().description(e.user_message("Please try again later.")),
                    );
                    Vec::new()
                }
            }
        }
    });

    let can_create = session.read().check_permission(Permission::CreateNotice);
    let current = filters.read().category;

    rsx! {
        section {
            class: "page",
            div {
                class: "page__header",
                h1 { class: "page__title", "Notice Board" }
                if can_create {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            nav.push(Route::CreateNotice {});
                        },
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Create Notice" }
                    }
                }
            }

            div {
                class: "toolbar",
                select {
                    class: "input toolbar__select",
                    aria_label: "Category",
                    value: "{current.as_str()}",
                    onchange: move |evt| filters.write().category = CategoryFilter::parse(&evt.value()),
                    for choice in CategoryFilter::options() {
                        option {
                            value: "{choice.as_str()}",
                            selected: choice == current,
                            "{choice.label()}"
                        }
                    }
                }
                form {
                    class: "toolbar__search",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        filters.write().search = search_input();
                    },
                    Input {
                        r#type: "search",
                        placeholder: "Search notices",
                        value: search_input(),
                        oninput: move |e: FormEvent| search_input.set(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        r#type: "submit",
                        title: "Search",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    }
                }
            }

            match &*notices.read() {
                None => rsx! {},
                Some(list) if list.is_empty() => rsx! {
                    p { class: "empty", "No notices found" }
                },
                Some(list) => rsx! {
                    div {
                        class: "card-grid",
                        for notice in list.iter().cloned() {
                            NoticeCard { key: "{notice.id}", notice }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn NoticeCard(notice: Notice) -> Element {
    let category = notice.category;
    rsx! {
        Link {
            to: Route::NoticeDetails { id: notice.id.clone() },
            class: "notice-card",
            div {
                class: "notice-card__meta",
                span {
                    class: "badge",
                    style: "background-color: {category.color()}",
                    "{category.label()}"
                }
                span { class: "notice-card__date", "{display_date(&notice.created_at)}" }
            }
            h2 { class: "notice-card__title", "{notice.title}" }
            p { class: "notice-card__excerpt", "{notice.excerpt()}" }
            if notice.pdf().is_some() || notice.image().is_some() {
                span {
                    class: "notice-card__attachment",
                    Icon { icon: FaPaperclip, width: 12, height: 12 }
                    " Attachment"
                }
            }
        }
    }
}
