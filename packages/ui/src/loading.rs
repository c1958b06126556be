//! Global page loader.
//!
//! Screens call [`Loading::track`] around their requests; the overlay is
//! visible while any tracked request is in flight, and while the session is
//! still being resolved.

use std::future::Future;

use dioxus::prelude::*;

use crate::auth::use_auth;

/// Count of requests in flight. Overlapping requests keep the loader up until
/// the last one finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingCounter {
    active: u32,
}

impl LoadingCounter {
    pub fn start(&mut self) {
        self.active = self.active.saturating_add(1);
    }

    pub fn stop(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.active > 0
    }
}

/// Handle to the global loader.
#[derive(Clone, Copy, PartialEq)]
pub struct Loading(Signal<LoadingCounter>);

impl Loading {
    pub fn start(&self) {
        let mut counter = self.0;
        counter.write().start();
    }

    pub fn stop(&self) {
        let mut counter = self.0;
        counter.write().stop();
    }

    pub fn is_loading(&self) -> bool {
        self.0.read().is_active()
    }

    /// Show the loader while `fut` runs. The loader is released even when the
    /// returned future is dropped before completing.
    pub async fn track<F: Future>(&self, fut: F) -> F::Output {
        let _active = ActiveRequest::begin(*self);
        fut.await
    }
}

/// Holds one count on the loader until dropped.
struct ActiveRequest(Loading);

impl ActiveRequest {
    fn begin(loading: Loading) -> Self {
        loading.start();
        Self(loading)
    }
}

impl Drop for ActiveRequest {
    fn drop(&mut self) {
        // The provider may already be gone when a screen unmounts
        let mut counter = self.0 .0;
        if let Ok(mut counter) = counter.try_write() {
            counter.stop();
        };
    }
}

pub fn use_loading() -> Loading {
    use_context::<Loading>()
}

#[component]
pub fn LoadingProvider(children: Element) -> Element {
    let counter = use_signal(LoadingCounter::default);
    use_context_provider(|| Loading(counter));

    rsx! {
        {children}
    }
}

/// Full-screen spinner shown while the session resolves or a request runs.
#[component]
pub fn PageLoader() -> Element {
    let loading = use_loading();
    let session = use_auth();

    if !loading.is_loading() && !session.read().is_loading() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "page-loader",
            role: "progressbar",
            aria_busy: "true",
            div { class: "page-loader__spinner" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::task::{Context, Poll, Waker};

    use super::*;

    thread_local! {
        static OBSERVED: Cell<Option<(bool, bool)>> = const { Cell::new(None) };
    }

    fn abandoned_request() -> Element {
        let loading = Loading(use_signal(LoadingCounter::default));
        use_hook(move || {
            let mut request = Box::pin(loading.track(std::future::pending::<()>()));
            let mut cx = Context::from_waker(Waker::noop());
            assert_eq!(request.as_mut().poll(&mut cx), Poll::Pending);
            let while_pending = loading.is_loading();
            drop(request);
            OBSERVED.with(|o| o.set(Some((while_pending, loading.is_loading()))));
        });
        rsx! {}
    }

    #[test]
    fn test_dropped_request_releases_loader() {
        let mut dom = VirtualDom::new(abandoned_request);
        dom.rebuild_in_place();
        assert_eq!(OBSERVED.with(Cell::get), Some((true, false)));
    }

    #[test]
    fn test_overlapping_requests() {
        let mut counter = LoadingCounter::default();
        assert!(!counter.is_active());
        counter.start();
        counter.start();
        counter.stop();
        assert!(counter.is_active());
        counter.stop();
        assert!(!counter.is_active());
    }

    #[test]
    fn test_unbalanced_stop_is_ignored() {
        let mut counter = LoadingCounter::default();
        counter.stop();
        assert!(!counter.is_active());
        counter.start();
        assert!(counter.is_active());
    }
}
