pub mod config;
pub mod forms;
pub mod guard;
pub mod models;
pub mod notice;
pub mod pagination;
pub mod permissions;
pub mod session;
pub mod time;
pub mod upload;
pub mod visitor;

mod memory;
pub use memory::{MemoryBackend, MemoryBackendError};

pub use config::{ClientConfig, ConfigError};
pub use forms::{Credentials, FormError, LoginForm, Registration, RegistrationForm};
pub use guard::{Decision, Guard, ReturnTo, DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};
pub use models::{Page, Role, User};
pub use notice::{CategoryFilter, Notice, NoticeCategory, NoticeDraft, NoticeFilters};
pub use pagination::Pagination;
pub use permissions::{has_permission, has_permission_tag, Permission};
pub use session::{Session, SessionBackend, SessionCell, SessionPhase, SessionStore};
pub use upload::{AttachmentKind, FormPart, UploadError, UploadLimits, UploadSlot};
pub use visitor::{Arrival, CheckIn, PreApproval, PreApprovalDraft, PreApprovalScope};
