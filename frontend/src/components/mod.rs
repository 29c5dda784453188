pub mod common;
pub mod dialog;
pub mod empty_state;
pub mod error;
pub mod layout;
pub mod list_status;
pub mod stats_card;
pub mod status_badge;
