pub mod form;
pub mod list;

pub use form::RuleForm;
pub use list::RulesTable;
