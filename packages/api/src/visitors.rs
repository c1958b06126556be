//! Visitor pre-approval and gate check-in endpoints.

use reqwest::Method;
use store::visitor::PreApprovalPayload;
use store::{Arrival, CheckIn, Page, Pagination, PreApproval, PreApprovalScope};

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;

impl ApiClient {
    /// One page of pre-approvals in `scope`.
    pub async fn pre_approvals_page(
        &self,
        scope: PreApprovalScope,
        pagination: &Pagination,
    ) -> Result<Page<PreApproval>, ApiError> {
        let request = self
            .request(Method::GET, endpoints::pre_approvals_page(scope))
            .query(&pagination.query());
        self.fetch_page(request).await
    }

    pub async fn pre_approval(&self, id: &str) -> Result<PreApproval, ApiError> {
        self.fetch(self.request(Method::GET, &endpoints::pre_approval(id)), None)
            .await
    }

    pub async fn create_pre_approval(&self, payload: &PreApprovalPayload) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, endpoints::PRE_APPROVALS)
            .json(payload);
        self.execute(request).await
    }

    pub async fn update_pre_approval(
        &self,
        id: &str,
        payload: &PreApprovalPayload,
    ) -> Result<(), ApiError> {
        let request = self
            .request(Method::PUT, &endpoints::pre_approval(id))
            .json(payload);
        self.execute(request).await
    }

    pub async fn delete_pre_approval(&self, id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &endpoints::pre_approval(id)))
            .await
    }

    /// Record a visitor's arrival at the gate.
    pub async fn check_in(&self, check_in: &CheckIn) -> Result<(), ApiError> {
        let request = self.request(Method::POST, endpoints::ARRIVALS).json(check_in);
        self.execute(request).await?;
        tracing::info!(pre_approval_id = %check_in.pre_approval_id, "visitor checked in");
        Ok(())
    }

    /// Visitors currently inside.
    pub async fn arrivals_page(&self, pagination: &Pagination) -> Result<Page<Arrival>, ApiError> {
        let request = self
            .request(Method::GET, endpoints::ARRIVALS_PAGE)
            .query(&pagination.query());
        self.fetch_page(request).await
    }

    pub async fn check_out(&self, arrival_id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::PUT, &endpoints::arrival_checkout(arrival_id)))
            .await?;
        tracing::info!(arrival_id, "visitor checked out");
        Ok(())
    }
}
