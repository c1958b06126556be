pub mod button;
pub mod input;
pub mod modal;
pub mod pager;
pub mod toast;
pub mod upload;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use input::{Field, Input, Label, TextArea};
pub use modal::{ConfirmDialog, ModalOverlay};
pub use pager::Pager;
pub use toast::{use_toast, ToastKind, ToastOptions, ToastProvider, ToastQueue, Toasts};
pub use upload::UploadField;
