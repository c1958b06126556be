//! Route guards rendered as layouts.
//!
//! Each layout asks [`Guard::decide`] what to do with the current route and
//! either renders the outlet, renders nothing while the session resolves, or
//! replaces the location.

use dioxus::prelude::*;
use store::{Decision, Guard, ReturnTo};
use ui::{use_auth, Header};

use crate::Route;

/// Wraps `/login` and `/register`. A signed-in visitor is sent on to the page
/// they originally asked for.
#[component]
pub fn PublicLayout() -> Element {
    let session = use_auth();
    let route = use_route::<Route>();

    let return_to = match &route {
        Route::Login { from } | Route::Register { from } => ReturnTo::parse(from),
        _ => None,
    };
    let decision = Guard::Public(return_to).decide(&session.read(), &route.to_string());

    match decision {
        Decision::Render => rsx! {
            main { class: "public", Outlet::<Route> {} }
        },
        other => {
            redirect(&other);
            rsx! {}
        }
    }
}

/// Wraps every signed-in page, enforcing the route's required permission.
#[component]
pub fn AuthenticatedLayout() -> Element {
    let session = use_auth();
    let route = use_route::<Route>();

    let guard = Guard::Authenticated(route.required_permission());
    let decision = guard.decide(&session.read(), &route.to_string());

    match decision {
        Decision::Render => rsx! {
            Header {
                Link { to: Route::Dashboard {}, active_class: "active", "Dashboard" }
                Link { to: Route::NoticeBoard {}, active_class: "active", "Notice Board" }
                Link { to: Route::PreApprovals {}, active_class: "active", "Visitor Pre-Approvals" }
                if session.read().check_permission(store::Permission::CheckInVisitors) {
                    Link { to: Route::SecurityCheckIn {}, active_class: "active", "Security Check-in" }
                }
            }
            main { class: "content", Outlet::<Route> {} }
        },
        other => {
            redirect(&other);
            rsx! {}
        }
    }
}

/// `/`: dashboard when signed in, login otherwise.
#[component]
pub fn Root() -> Element {
    let session = use_auth();
    redirect(&Guard::Default.decide(&session.read(), "/"));
    rsx! {}
}

/// Unknown paths resolve like `/`.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let session = use_auth();
    let decision = Guard::Default.decide(&session.read(), "/");
    if decision != Decision::Pending {
        tracing::debug!(path = %segments.join("/"), "unknown route");
    }
    redirect(&decision);
    rsx! {}
}

fn redirect(decision: &Decision) {
    let nav = navigator();
    match decision {
        Decision::Pending | Decision::Render => {}
        Decision::ToLogin { from } => {
            nav.replace(Route::Login {
                from: from
                    .as_ref()
                    .map(|target| target.target_path().to_string())
                    .unwrap_or_default(),
            });
        }
        Decision::ToDashboard => {
            nav.replace(Route::Dashboard {});
        }
        Decision::ToReturn(target) => match target.target_path().parse::<Route>() {
            Ok(route) => {
                nav.replace(route);
            }
            Err(_) => {
                tracing::warn!(target = target.target_path(), "return target is not a route");
                nav.replace(Route::Dashboard {});
            }
        },
    }
}
