use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::icons::FaBuilding;
use crate::Icon;

const HEADER_CSS: Asset = asset!("/src/header.css");

/// Top bar of every signed-in page. `children` fill the navigation slot.
#[component]
pub fn Header(#[props(default = "Society Management".to_string())] title: String, children: Element) -> Element {
    let session = use_auth();
    let session = session.read();

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        header {
            class: "header",
            div {
                class: "header__brand",
                Icon { icon: FaBuilding, width: 20, height: 20 }
                span { class: "header__title", "{title}" }
            }
            nav { class: "header__nav", {children} }
            div {
                class: "header__account",
                if let Some(user) = session.user() {
                    span { class: "header__contact", "{user.contact}" }
                    span { class: "header__role", "{user.role.label()}" }
                }
                LogoutButton {}
            }
        }
    }
}
