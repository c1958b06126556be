use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;
use crate::session::SessionBackend;

/// Failure modes a [`MemoryBackend`] can be scripted to produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MemoryBackendError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("backend unavailable")]
    Unavailable,
    #[error("request failed with status {0}")]
    Status(u16),
}

#[derive(Debug, Default)]
struct State {
    user: Option<User>,
    identity_failure: Option<MemoryBackendError>,
    logout_failure: Option<MemoryBackendError>,
    identity_calls: usize,
    logout_calls: usize,
}

/// In-memory identity service for tests and offline previews.
///
/// Clones share state, so a test can keep a handle while the store owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Rc<RefCell<State>>,
}

impl MemoryBackend {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(user: User) -> Self {
        let backend = Self::default();
        backend.sign_in(user);
        backend
    }

    pub fn sign_in(&self, user: User) {
        self.state.borrow_mut().user = Some(user);
    }

    /// Make every identity lookup fail with `error` instead of answering 401.
    pub fn fail_identity(&self, error: MemoryBackendError) {
        self.state.borrow_mut().identity_failure = Some(error);
    }

    pub fn fail_logout(&self, error: MemoryBackendError) {
        self.state.borrow_mut().logout_failure = Some(error);
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn identity_calls(&self) -> usize {
        self.state.borrow().identity_calls
    }

    pub fn logout_calls(&self) -> usize {
        self.state.borrow().logout_calls
    }
}

impl SessionBackend for MemoryBackend {
    type Error = MemoryBackendError;

    async fn fetch_current_user(&self) -> Result<User, MemoryBackendError> {
        let mut state = self.state.borrow_mut();
        state.identity_calls += 1;
        if let Some(error) = state.identity_failure.clone() {
            return Err(error);
        }
        state.user.clone().ok_or(MemoryBackendError::Unauthorized)
    }

    async fn end_session(&self) -> Result<(), MemoryBackendError> {
        let mut state = self.state.borrow_mut();
        state.logout_calls += 1;
        if let Some(error) = state.logout_failure.clone() {
            return Err(error);
        }
        state.user = None;
        Ok(())
    }
}
