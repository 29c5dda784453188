pub mod create_form;
pub mod detail;
pub mod list;

pub use create_form::CreatePurchaseRequestForm;
pub use detail::PurchaseRequestDetail;
pub use list::PurchaseRequestsTable;
