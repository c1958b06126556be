use api::ApiClient;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::{ClientConfig, Permission};
use ui::{AuthProvider, LoadingProvider, PageLoader, ToastProvider};
use views::{
    AuthenticatedLayout, CreateNotice, CreatePreApproval, Dashboard, EditNotice, EditPreApproval,
    Login, NoticeBoard, NoticeDetails, NotFound, PreApprovals, PublicLayout, Register, Root,
    SecurityCheckIn,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/login?:from")]
        Login { from: String },
        #[route("/register?:from")]
        Register { from: String },
    #[end_layout]
    #[layout(AuthenticatedLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/notice-board")]
        NoticeBoard {},
        #[route("/notices/create")]
        CreateNotice {},
        #[route("/notices/:id")]
        NoticeDetails { id: String },
        #[route("/notices/:id/edit")]
        EditNotice { id: String },
        #[route("/visitor-pre-approvals")]
        PreApprovals {},
        #[route("/visitor-pre-approvals/create")]
        CreatePreApproval {},
        #[route("/visitor-pre-approvals/:id/edit")]
        EditPreApproval { id: String },
        #[route("/security-check-in")]
        SecurityCheckIn {},
    #[end_layout]
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Permission an authenticated user needs to open this route.
    fn required_permission(&self) -> Option<Permission> {
        match self {
            Route::CreateNotice {} => Some(Permission::CreateNotice),
            Route::EditNotice { .. } => Some(Permission::EditNotice),
            Route::SecurityCheckIn {} => Some(Permission::CheckInVisitors),
            _ => None,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../society.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

/// The embedded config, with the build-time base URL override applied.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml_or_default(CONFIG_TOML);
    match option_env!("SOCIETY_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let client = use_hook({
        let config = config.clone();
        move || ApiClient::from_config(&config)
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match client {
            Ok(api) => rsx! {
                Shell { config, api }
            },
            Err(e) => rsx! {
                div {
                    class: "fatal",
                    h1 { "Society Management" }
                    p { "The application is misconfigured: {e}" }
                }
            },
        }
    }
}

#[component]
fn Shell(config: ClientConfig, api: ApiClient) -> Element {
    let duration_secs = config.notifications.duration_secs;
    use_context_provider(|| config);
    use_context_provider(|| api);

    rsx! {
        ToastProvider {
            duration_secs,
            LoadingProvider {
                AuthProvider {
                    PageLoader {}
                    Router::<Route> {}
                }
            }
        }
    }
}
