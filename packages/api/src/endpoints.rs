//! Backend paths, relative to the configured base URL.

use store::PreApprovalScope;

pub const CURRENT_USER: &str = "/users/me";
pub const LOGIN: &str = "/users/login";
pub const LOGOUT: &str = "/users/logout";
pub const REGISTER_RESIDENT: &str = "/users/register/resident";

pub const NOTICES: &str = "/notices";

pub fn notice(id: &str) -> String {
    format!("{NOTICES}/{id}")
}

pub const PRE_APPROVALS: &str = "/visitor-pre-approvals";

pub fn pre_approval(id: &str) -> String {
    format!("{PRE_APPROVALS}/{id}")
}

/// Paginated listing for `scope`.
pub fn pre_approvals_page(scope: PreApprovalScope) -> &'static str {
    match scope {
        PreApprovalScope::All => "/visitor-pre-approvals/paginated",
        PreApprovalScope::Upcoming => "/visitor-pre-approvals/paginated/upcoming",
        PreApprovalScope::Expired => "/visitor-pre-approvals/paginated/expired",
    }
}

pub const ARRIVALS: &str = "/visitor-pre-approvals/arrivals";
pub const ARRIVALS_PAGE: &str = "/visitor-pre-approvals/arrivals/paginated";

pub fn arrival_checkout(id: &str) -> String {
    format!("{ARRIVALS}/{id}/checkout")
}
