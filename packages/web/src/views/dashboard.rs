use dioxus::prelude::*;
use store::Permission;
use ui::icons::{FaClipboardList, FaIdBadge, FaUserCheck};
use ui::{use_auth, Icon};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_auth();
    let session = session.read();
    let can_check_in = session.check_permission(Permission::CheckInVisitors);
    let greeting = session
        .user()
        .map(|user| format!("Welcome, {}", user.contact))
        .unwrap_or_else(|| "Welcome".to_string());

    rsx! {
        section {
            class: "page",
            h1 { class: "page__title", "{greeting}" }
            div {
                class: "card-grid",
                FeatureCard {
                    to: Route::NoticeBoard {},
                    title: "Notice Board",
                    description: "Announcements from the committee",
                    Icon { icon: FaClipboardList, width: 28, height: 28 }
                }
                FeatureCard {
                    to: Route::PreApprovals {},
                    title: "Visitor Pre-Approvals",
                    description: "Register expected visitors ahead of their arrival",
                    Icon { icon: FaIdBadge, width: 28, height: 28 }
                }
                if can_check_in {
                    FeatureCard {
                        to: Route::SecurityCheckIn {},
                        title: "Security Check-in",
                        description: "Check visitors in and out at the gate",
                        Icon { icon: FaUserCheck, width: 28, height: 28 }
                    }
                }
            }
        }
    }
}

#[component]
fn FeatureCard(to: Route, title: String, description: String, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "feature-card",
            div { class: "feature-card__icon", {children} }
            h2 { class: "feature-card__title", "{title}" }
            p { class: "feature-card__description", "{description}" }
        }
    }
}
