//! Notice board endpoints.

use reqwest::Method;
use store::notice::NoticeFields;
use store::{notice::Notice, NoticeFilters, UploadSlot};

use crate::client::{multipart_form, ApiClient};
use crate::endpoints;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /notices?category=&search=`
    pub async fn notices(&self, filters: &NoticeFilters) -> Result<Vec<Notice>, ApiError> {
        let request = self
            .request(Method::GET, endpoints::NOTICES)
            .query(&filters.query_pairs());
        self.fetch(request, Some("notices")).await
    }

    /// `GET /notices/:id`
    pub async fn notice(&self, id: &str) -> Result<Notice, ApiError> {
        self.fetch(self.request(Method::GET, &endpoints::notice(id)), Some("notice"))
            .await
    }

    /// `POST /notices` as multipart.
    pub async fn create_notice(
        &self,
        fields: &NoticeFields,
        image: &UploadSlot,
        pdf: &UploadSlot,
    ) -> Result<(), ApiError> {
        let form = multipart_form(store::upload::notice_form_parts(fields, image, pdf))?;
        let request = self.request(Method::POST, endpoints::NOTICES).multipart(form);
        self.execute(request).await?;
        tracing::info!(title = %fields.title, "notice created");
        Ok(())
    }

    /// `PUT /notices/:id` as multipart. Kept attachments are sent back by URL.
    pub async fn update_notice(
        &self,
        id: &str,
        fields: &NoticeFields,
        image: &UploadSlot,
        pdf: &UploadSlot,
    ) -> Result<(), ApiError> {
        let form = multipart_form(store::upload::notice_form_parts(fields, image, pdf))?;
        let request = self
            .request(Method::PUT, &endpoints::notice(id))
            .multipart(form);
        self.execute(request).await?;
        tracing::info!(notice_id = id, "notice updated");
        Ok(())
    }

    /// `DELETE /notices/:id`
    pub async fn delete_notice(&self, id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::DELETE, &endpoints::notice(id)))
            .await?;
        tracing::info!(notice_id = id, "notice deleted");
        Ok(())
    }
}
