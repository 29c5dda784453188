pub mod approvals;
pub mod dashboard;
pub mod exceptions;
pub mod purchase_requests;
pub mod rules;

pub use approvals::ApprovalsPage;
pub use dashboard::DashboardPage;
pub use exceptions::ExceptionsPage;
pub use purchase_requests::PurchaseRequestsPage;
pub use rules::RulesPage;
