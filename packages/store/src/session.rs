//! # Session store: "am I logged in, and as whom"
//!
//! [`SessionStore`] is the single writer of the client's [`Session`]. It talks to
//! the identity service through the [`SessionBackend`] trait and publishes every
//! transition into a [`SessionCell`], so the same logic drives a reactive signal
//! in the browser and a plain `Rc<RefCell<_>>` in tests.
//!
//! ## Lifecycle
//!
//! ```text
//! Initializing (loading) ──refresh ok──▶ Authenticated(user)
//!        │                                     │
//!        └────refresh err──▶ Unauthenticated ◀─┘ logout (loading while in flight)
//! ```
//!
//! - [`refresh`](SessionStore::refresh) never fails: any error from the backend
//!   means "not signed in".
//! - [`logout`](SessionStore::logout) always clears the local session, then
//!   hands the remote error (if any) back so the caller can tell the user.
//! - While `loading` is set, `authenticated` and `user` are unknown; every
//!   accessor that answers an authorization question returns `false`.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::models::{Role, User};
use crate::permissions::{has_permission, Permission};

/// Snapshot of the client's belief about the signed-in identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    authenticated: bool,
    loading: bool,
    user: Option<User>,
}

/// Coarse state of a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// The identity check (or a logout) is in flight.
    Pending,
    Authenticated,
    Unauthenticated,
}

impl Default for Session {
    fn default() -> Self {
        Self::initializing()
    }
}

impl Session {
    /// The state at mount: nothing is known yet.
    pub fn initializing() -> Self {
        Self {
            authenticated: false,
            loading: true,
            user: None,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            authenticated: true,
            loading: false,
            user: Some(user),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            loading: false,
            user: None,
        }
    }

    /// Same identity, but marked as loading while a logout is in flight.
    fn logging_out(self) -> Self {
        Self {
            loading: true,
            ..self
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` only once the identity check has completed successfully.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.authenticated
    }

    /// The resolved user. `None` while loading.
    pub fn user(&self) -> Option<&User> {
        if self.loading {
            return None;
        }
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Pending
        } else if self.authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Permission check against the static table using the current role.
    pub fn check_permission(&self, permission: Permission) -> bool {
        has_permission(self.role(), permission)
    }
}

/// Identity service the session store depends on.
pub trait SessionBackend {
    type Error: std::error::Error;

    /// Resolve the user behind the current credentials (`GET /users/me`).
    fn fetch_current_user(&self) -> impl Future<Output = Result<User, Self::Error>>;

    /// End the server-side session (`POST /users/logout`).
    fn end_session(&self) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Where the store publishes the session.
pub trait SessionCell {
    fn snapshot(&self) -> Session;
    fn replace(&mut self, session: Session);
}

impl SessionCell for Rc<RefCell<Session>> {
    fn snapshot(&self) -> Session {
        self.borrow().clone()
    }

    fn replace(&mut self, session: Session) {
        *self.borrow_mut() = session;
    }
}

/// Single writer of the [`Session`].
///
/// Cloning the store clones its handles; every clone publishes into the same cell.
#[derive(Clone, Debug)]
pub struct SessionStore<B, C> {
    backend: B,
    cell: C,
}

impl<B: SessionBackend, C: SessionCell> SessionStore<B, C> {
    /// Wrap a backend and a cell without touching the cell.
    ///
    /// The caller is responsible for running [`start`](Self::start) once;
    /// [`init`](Self::init) does both.
    pub fn new(backend: B, cell: C) -> Self {
        Self { backend, cell }
    }

    /// Create the store and perform the initial identity check.
    pub async fn init(backend: B, cell: C) -> Self {
        let mut store = Self::new(backend, cell);
        store.start().await;
        store
    }

    /// The initial identity check: mark the session as initializing, then refresh.
    pub async fn start(&mut self) -> Session {
        self.cell.replace(Session::initializing());
        self.refresh().await
    }

    pub fn session(&self) -> Session {
        self.cell.snapshot()
    }

    pub fn check_permission(&self, permission: Permission) -> bool {
        self.session().check_permission(permission)
    }

    /// Re-resolve the current user. Failures mean "signed out" and are not
    /// reported as errors.
    pub async fn refresh(&mut self) -> Session {
        let session = match self.backend.fetch_current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = %user.role, "session established");
                Session::authenticated(user)
            }
            Err(e) => {
                tracing::debug!("no active session: {e}");
                Session::anonymous()
            }
        };
        self.cell.replace(session.clone());
        session
    }

    /// End the session.
    ///
    /// Local state is cleared even when the backend call fails; the failure is
    /// returned so the caller can notify the user. Ignored while another
    /// logout or the initial check is still in flight.
    pub async fn logout(&mut self) -> Result<(), B::Error> {
        let current = self.cell.snapshot();
        if current.is_loading() {
            tracing::debug!("logout ignored: session is busy");
            return Ok(());
        }

        self.cell.replace(current.logging_out());
        let result = self.backend.end_session().await;
        self.cell.replace(Session::anonymous());

        match result {
            Ok(()) => {
                tracing::info!("session ended");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("logout request failed, local session cleared anyway: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBackend, MemoryBackendError};

    fn resident() -> User {
        User {
            id: "1".to_string(),
            role: Role::Resident,
            contact: "9876543210".to_string(),
        }
    }

    fn committee() -> User {
        User {
            id: "2".to_string(),
            role: Role::Committee,
            contact: "9000000000".to_string(),
        }
    }

    fn cell() -> Rc<RefCell<Session>> {
        Rc::new(RefCell::new(Session::initializing()))
    }

    #[test]
    fn test_loading_session_is_untrusted() {
        let session = Session::authenticated(committee()).logging_out();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(!session.check_permission(Permission::CreateNotice));
        assert_eq!(session.phase(), SessionPhase::Pending);
    }

    #[tokio::test]
    async fn test_init_refreshes_exactly_once() {
        let backend = MemoryBackend::signed_in(committee());
        let store = SessionStore::init(backend.clone(), cell()).await;

        assert_eq!(backend.identity_calls(), 1);
        let session = store.session();
        assert!(!session.is_loading());
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(&committee()));
    }

    #[tokio::test]
    async fn test_start_resolves_a_store_built_with_new() {
        let backend = MemoryBackend::signed_in(resident());
        let shared = Rc::new(RefCell::new(Session::anonymous()));
        let mut store = SessionStore::new(backend.clone(), shared.clone());
        assert_eq!(backend.identity_calls(), 0);

        let session = store.start().await;
        assert_eq!(backend.identity_calls(), 1);
        assert!(session.is_authenticated());
        assert_eq!(shared.snapshot(), session);
    }

    #[tokio::test]
    async fn test_refresh_with_401_signs_out() {
        let backend = MemoryBackend::signed_out();
        let mut store = SessionStore::new(backend, cell());

        let session = store.refresh().await;

        assert_eq!(session, Session::anonymous());
        assert_eq!(store.session(), Session::anonymous());
        assert!(!store.session().is_loading());
    }

    #[tokio::test]
    async fn test_refresh_network_failure_signs_out() {
        let backend = MemoryBackend::signed_in(committee());
        backend.fail_identity(MemoryBackendError::Unavailable);
        let store = SessionStore::init(backend, cell()).await;

        assert_eq!(store.session().phase(), SessionPhase::Unauthenticated);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let backend = MemoryBackend::signed_in(committee());
        let mut store = SessionStore::init(backend.clone(), cell()).await;

        assert!(store.logout().await.is_ok());

        assert_eq!(store.session(), Session::anonymous());
        assert_eq!(backend.logout_calls(), 1);
        assert!(backend.current_user().is_none());
    }

    #[tokio::test]
    async fn test_logout_failure_still_clears_session() {
        let backend = MemoryBackend::signed_in(committee());
        backend.fail_logout(MemoryBackendError::Status(500));
        let mut store = SessionStore::init(backend, cell()).await;

        let result = store.logout().await;

        assert_eq!(result, Err(MemoryBackendError::Status(500)));
        let session = store.session();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_logout_ignored_while_loading() {
        let backend = MemoryBackend::signed_in(committee());
        let shared = Rc::new(RefCell::new(Session::authenticated(committee()).logging_out()));
        let mut store = SessionStore::new(backend.clone(), shared.clone());

        assert!(store.logout().await.is_ok());

        assert_eq!(backend.logout_calls(), 0);
        assert!(shared.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_clones_share_the_cell() {
        let backend = MemoryBackend::signed_in(resident());
        let shared = cell();
        let mut first = SessionStore::new(backend.clone(), shared.clone());
        let second = first.clone();

        first.refresh().await;

        assert_eq!(second.session().role(), Some(Role::Resident));
        assert!(!second.check_permission(Permission::CreateNotice));
    }

    #[tokio::test]
    async fn test_refresh_after_login_picks_up_user() {
        let backend = MemoryBackend::signed_out();
        let mut store = SessionStore::init(backend.clone(), cell()).await;
        assert!(!store.session().is_authenticated());

        backend.sign_in(committee());
        store.refresh().await;

        assert!(store.check_permission(Permission::CreateNotice));
    }
}
