use dioxus::prelude::*;
use store::time::{display_date, display_date_time};
use store::visitor::can_manage;
use store::{PreApproval, PreApprovalScope};
use ui::components::{Button, ButtonSize, ButtonVariant, ConfirmDialog, Pager};
use ui::icons::{FaPen, FaPlus, FaTrash};
use ui::{use_api, use_auth, use_loading, use_toast, Icon, ToastOptions};

use super::paged::use_paged;
use crate::Route;

#[component]
pub fn PreApprovals() -> Element {
    let api = use_api();
    let session = use_auth();
    let loading = use_loading();
    let toast = use_toast();
    let nav = use_navigator();
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let table = use_paged("Failed to load pre-approvals", {
        let api = api.clone();
        move |pagination| {
            let api = api.clone();
            async move {
                api.pre_approvals_page(PreApprovalScope::All, &pagination)
                    .await
            }
        }
    });

    let handle_delete = move |_| {
        let api = api.clone();
        async move {
            let Some(id) = pending_delete() else {
                return;
            };
            deleting.set(true);
            let result = loading.track(api.delete_pre_approval(&id)).await;
            deleting.set(false);
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    toast.success("Pre-approval deleted".to_string(), ToastOptions::new());
                    table.reload();
                }
                Err(e) => toast.error(
                    "Delete Failed".to_string(),
                    ToastOptions::new().description(e.user_message("The pre-approval could not be deleted.")),
                ),
            }
        }
    };

    let session = session.read();

    rsx! {
        section {
            class: "page",
            div {
                class: "page__header",
                h1 { class: "page__title", "Visitor Pre-Approvals" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        nav.push(Route::CreatePreApproval {});
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    span { "Create Pre-Approval" }
                }
            }

            table {
                class: "table",
                thead {
                    tr {
                        th { "Visitor" }
                        th { "Apartment" }
                        th { "Arrival" }
                        th { "Departure" }
                        th { "Purpose" }
                        th { "Created" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for record in table.rows() {
                        PreApprovalRow {
                            key: "{record.id}",
                            manageable: can_manage(&session, &record),
                            record,
                            on_delete: move |id| pending_delete.set(Some(id)),
                        }
                    }
                    if table.rows().is_empty() {
                        tr { td { class: "table__empty", colspan: 7, "No pre-approvals yet" } }
                    }
                }
            }

            Pager {
                pagination: table.pagination(),
                on_change: move |pagination| table.set_pagination(pagination),
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                title: "Delete pre-approval",
                message: "Are you sure you want to delete this pre-approval?",
                busy: deleting(),
                on_confirm: handle_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn PreApprovalRow(record: PreApproval, manageable: bool, on_delete: EventHandler<String>) -> Element {
    let nav = use_navigator();
    let optional = |value: &Option<String>| value.as_deref().map(display_date_time).unwrap_or_else(|| "-".to_string());
    let edit_id = record.id.clone();
    let delete_id = record.id.clone();

    rsx! {
        tr {
            td { "{record.visitor_name}" }
            td { "{record.apartment_number}" }
            td { "{optional(&record.arrival_time)}" }
            td { "{optional(&record.departure_time)}" }
            td { {record.purpose.clone().unwrap_or_else(|| "-".to_string())} }
            td { "{display_date(&record.created_at)}" }
            td {
                class: "table__actions",
                if manageable {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        title: "Edit",
                        onclick: move |_| {
                            nav.push(Route::EditPreApproval { id: edit_id.clone() });
                        },
                        Icon { icon: FaPen, width: 12, height: 12 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                } else {
                    span { class: "muted", "NA" }
                }
            }
        }
    }
}
