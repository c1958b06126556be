use dioxus::prelude::*;
use store::pagination::PAGE_SIZE_OPTIONS;
use store::Pagination;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Footer for paginated tables: range label, page size select, prev/next.
#[component]
pub fn Pager(pagination: Pagination, on_change: EventHandler<Pagination>) -> Element {
    let label = match pagination.visible_range() {
        Some((first, last)) => format!("{first}-{last} of {} items", pagination.total()),
        None => "No items".to_string(),
    };

    rsx! {
        div {
            class: "pager",
            span { class: "pager__range", "{label}" }
            select {
                class: "pager__size",
                aria_label: "Rows per page",
                value: "{pagination.page_size()}",
                onchange: move |evt| {
                    if let Ok(size) = evt.value().parse::<u32>() {
                        on_change.call(pagination.with_page_size(size));
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        value: "{size}",
                        selected: size == pagination.page_size(),
                        "{size} / page"
                    }
                }
            }
            button {
                class: "pager__step",
                r#type: "button",
                aria_label: "Previous page",
                disabled: !pagination.has_previous(),
                onclick: move |_| on_change.call(pagination.previous()),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
            }
            span { class: "pager__page", "{pagination.page()} / {pagination.page_count()}" }
            button {
                class: "pager__step",
                r#type: "button",
                aria_label: "Next page",
                disabled: !pagination.has_next(),
                onclick: move |_| on_change.call(pagination.next()),
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}
