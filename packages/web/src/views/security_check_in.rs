//! Security desk: upcoming and expired pre-approvals, and visitors on site.

use dioxus::prelude::*;
use store::time::{display_date_time, display_time};
use store::visitor::filter_by_name;
use store::{Arrival, CheckIn, PreApproval, PreApprovalScope};
use ui::components::{Button, ButtonSize, ButtonVariant, Input, Pager};
use ui::icons::FaArrowLeft;
use ui::{use_api, use_loading, use_toast, Icon, ToastOptions};

use super::paged::use_paged;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Upcoming,
    Expired,
    CheckedIn,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Upcoming, Tab::Expired, Tab::CheckedIn];

    fn label(&self) -> &'static str {
        match self {
            Tab::Upcoming => "Upcoming Arrivals",
            Tab::Expired => "Expired Arrivals",
            Tab::CheckedIn => "Checked In Visitors",
        }
    }
}

#[component]
pub fn SecurityCheckIn() -> Element {
    let mut active = use_signal(|| Tab::Upcoming);

    rsx! {
        section {
            class: "page",
            Link {
                to: Route::Dashboard {},
                class: "back-link",
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                " Back to Dashboard"
            }
            h1 { class: "page__title", "Security Check-in" }

            div {
                class: "tabs",
                role: "tablist",
                for tab in Tab::ALL {
                    button {
                        class: if active() == tab { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                        r#type: "button",
                        role: "tab",
                        aria_selected: active() == tab,
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            // Each tab owns its cursor; switching remounts and refetches
            match active() {
                Tab::Upcoming => rsx! { UpcomingArrivals {} },
                Tab::Expired => rsx! { ExpiredArrivals {} },
                Tab::CheckedIn => rsx! { CheckedInVisitors {} },
            }
        }
    }
}

#[component]
fn UpcomingArrivals() -> Element {
    let api = use_api();
    let loading = use_loading();
    let toast = use_toast();
    let mut search = use_signal(String::new);

    let table = use_paged("Failed to fetch pre-approvals", {
        let api = api.clone();
        move |pagination| {
            let api = api.clone();
            async move {
                api.pre_approvals_page(PreApprovalScope::Upcoming, &pagination)
                    .await
            }
        }
    });

    let handle_check_in = move |record: PreApproval| {
        let api = api.clone();
        async move {
            let check_in = CheckIn::for_pre_approval(&record);
            match loading.track(api.check_in(&check_in)).await {
                Ok(()) => {
                    toast.success(format!("Checked in {}", record.visitor_name), ToastOptions::new());
                    table.reload();
                }
                Err(e) => toast.error(
                    "Check-in Failed".to_string(),
                    ToastOptions::new().description(e.user_message("Failed to check in visitor.")),
                ),
            }
        }
    };

    let rows = table.rows();
    let visible = filter_by_name(&rows, &search.read());

    rsx! {
        div {
            class: "tab-panel",
            h2 { class: "tab-panel__title", "Upcoming Visitors" }
            Input {
                r#type: "search",
                class: "tab-panel__search",
                placeholder: "Search visitor",
                value: search(),
                oninput: move |e: FormEvent| search.set(e.value()),
            }
            table {
                class: "table",
                thead {
                    tr {
                        th { "Visitor Name" }
                        th { "Expected Arrival" }
                        th { "Apartment" }
                        th { "Action" }
                    }
                }
                tbody {
                    for record in visible.into_iter().cloned() {
                        tr {
                            key: "{record.id}",
                            td { "{record.visitor_name}" }
                            td { {arrival_label(&record)} }
                            td { "{record.apartment_number}" }
                            td {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    size: ButtonSize::Small,
                                    onclick: {
                                        let handle_check_in = handle_check_in.clone();
                                        move |_| handle_check_in(record.clone())
                                    },
                                    "Check In"
                                }
                            }
                        }
                    }
                }
            }
            Pager {
                pagination: table.pagination(),
                on_change: move |pagination| table.set_pagination(pagination),
            }
        }
    }
}

#[component]
fn ExpiredArrivals() -> Element {
    let api = use_api();
    let table = use_paged("Failed to fetch expired pre-approvals", move |pagination| {
        let api = api.clone();
        async move {
            api.pre_approvals_page(PreApprovalScope::Expired, &pagination)
                .await
        }
    });

    rsx! {
        div {
            class: "tab-panel",
            h2 { class: "tab-panel__title", "Expired Pre-Approvals" }
            table {
                class: "table",
                thead {
                    tr {
                        th { "Visitor Name" }
                        th { "Expected Arrival" }
                        th { "Apartment" }
                        th { "Purpose" }
                    }
                }
                tbody {
                    for record in table.rows() {
                        tr {
                            key: "{record.id}",
                            td { "{record.visitor_name}" }
                            td { {arrival_label(&record)} }
                            td { "{record.apartment_number}" }
                            td { {record.purpose.clone().unwrap_or_else(|| "-".to_string())} }
                        }
                    }
                }
            }
            Pager {
                pagination: table.pagination(),
                on_change: move |pagination| table.set_pagination(pagination),
            }
        }
    }
}

#[component]
fn CheckedInVisitors() -> Element {
    let api = use_api();
    let loading = use_loading();
    let toast = use_toast();

    let table = use_paged("Failed to fetch checked-in visitors.", {
        let api = api.clone();
        move |pagination| {
            let api = api.clone();
            async move { api.arrivals_page(&pagination).await }
        }
    });

    let handle_check_out = move |arrival: Arrival| {
        let api = api.clone();
        async move {
            match loading.track(api.check_out(&arrival.id)).await {
                Ok(()) => {
                    toast.success(format!("Checked out {}", arrival.visitor_name), ToastOptions::new());
                    table.reload();
                }
                Err(e) => toast.error(
                    "Check-out Failed".to_string(),
                    ToastOptions::new().description(e.user_message("Failed to check out visitor.")),
                ),
            }
        }
    };

    rsx! {
        div {
            class: "tab-panel",
            h2 { class: "tab-panel__title", "Currently Checked In" }
            table {
                class: "table",
                thead {
                    tr {
                        th { "Visitor Name" }
                        th { "Arrival Time" }
                        th { "Apartment" }
                        th { "Action" }
                    }
                }
                tbody {
                    for arrival in table.rows() {
                        tr {
                            key: "{arrival.id}",
                            td { "{arrival.visitor_name}" }
                            td { "{display_time(&arrival.arrival_time)}" }
                            td { "{arrival.apartment_number}" }
                            td {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    size: ButtonSize::Small,
                                    onclick: {
                                        let handle_check_out = handle_check_out.clone();
                                        move |_| handle_check_out(arrival.clone())
                                    },
                                    "Check Out"
                                }
                            }
                        }
                    }
                }
            }
            Pager {
                pagination: table.pagination(),
                on_change: move |pagination| table.set_pagination(pagination),
            }
        }
    }
}

fn arrival_label(record: &PreApproval) -> String {
    record
        .arrival_time
        .as_deref()
        .map(display_date_time)
        .unwrap_or_else(|| "Not Specified".to_string())
}
