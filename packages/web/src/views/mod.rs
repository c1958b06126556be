mod layouts;
pub use layouts::{AuthenticatedLayout, NotFound, PublicLayout, Root};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod notice_board;
pub use notice_board::NoticeBoard;

mod notice_details;
pub use notice_details::NoticeDetails;

mod notice_form;
pub use notice_form::{CreateNotice, EditNotice};

mod paged;

mod pre_approvals;
pub use pre_approvals::PreApprovals;

mod pre_approval_form;
pub use pre_approval_form::{CreatePreApproval, EditPreApproval};

mod security_check_in;
pub use security_check_in::SecurityCheckIn;
