//! Shared state for the paginated tables.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;
use store::{ClientConfig, Page, Pagination};
use ui::{use_loading, use_toast, ToastOptions};

/// One page of rows and the cursor that selected them.
///
/// The requested page and size live in `cursor`; the backend's total is kept
/// apart so that recording it does not trigger another fetch.
pub struct PagedRows<T: 'static> {
    cursor: Signal<Pagination>,
    total: Signal<u64>,
    rows: Signal<Vec<T>>,
    resource: Resource<()>,
}

impl<T> Clone for PagedRows<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PagedRows<T> {}

impl<T: Clone + 'static> PagedRows<T> {
    pub fn pagination(&self) -> Pagination {
        (self.cursor)().with_total((self.total)())
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn set_pagination(&self, pagination: Pagination) {
        let mut cursor = self.cursor;
        cursor.set(pagination);
    }

    /// Fetch the current page again, e.g. after a row was deleted.
    pub fn reload(&self) {
        let mut resource = self.resource;
        resource.restart();
    }
}

/// Fetch a page with `fetch` whenever the cursor changes.
pub fn use_paged<T, F, Fut>(error_title: &'static str, mut fetch: F) -> PagedRows<T>
where
    T: Clone + 'static,
    F: FnMut(Pagination) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let config = use_context::<ClientConfig>();
    let loading = use_loading();
    let toast = use_toast();
    let mut cursor = use_signal(|| config.pagination());
    let mut total = use_signal(|| 0u64);
    let mut rows = use_signal(Vec::<T>::new);

    let resource = use_resource(move || {
        let query = cursor();
        let request = fetch(query);
        async move {
            match loading.track(request).await {
                Ok(page) => {
                    let clamped = query.with_total(page.total);
                    total.set(page.total);
                    rows.set(page.data);
                    // The page vanished, e.g. its last row was deleted
                    if clamped.page() != query.page() {
                        cursor.set(clamped);
                    }
                }
                Err(e) => {
                    toast.error(
                        error_title.to_string(),
                        ToastOptions::new().description(e.user_message("Please try again later.")),
                    );
                }
            }
        }
    });

    PagedRows {
        cursor,
        total,
        rows,
        resource,
    }
}
