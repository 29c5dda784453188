pub mod quick_links;
pub mod summary;

pub use quick_links::QuickLinks;
pub use summary::SummarySection;
