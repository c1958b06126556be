//! Account endpoints and the session backend.
//!
//! The backend keeps the session in an HTTP-only cookie, so login and
//! registration return nothing the client needs; the session store re-reads
//! the identity with [`ApiClient::current_user`] afterwards.

use reqwest::Method;
use store::{Credentials, Registration, SessionBackend, User};

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /users/me`
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch(self.request(Method::GET, endpoints::CURRENT_USER), None)
            .await
    }

    /// `POST /users/login`
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = self.request(Method::POST, endpoints::LOGIN).json(credentials);
        self.execute(request).await
    }

    /// `POST /users/logout`
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.request(Method::POST, endpoints::LOGOUT))
            .await
    }

    /// `POST /users/register/resident`
    pub async fn register_resident(&self, registration: &Registration) -> Result<(), ApiError> {
        let request = self
            .request(Method::POST, endpoints::REGISTER_RESIDENT)
            .json(registration);
        self.execute(request).await
    }
}

impl SessionBackend for ApiClient {
    type Error = ApiError;

    async fn fetch_current_user(&self) -> Result<User, ApiError> {
        self.current_user().await
    }

    async fn end_session(&self) -> Result<(), ApiError> {
        self.logout().await
    }
}
