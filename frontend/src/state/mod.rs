pub mod list_page;
pub mod session;
