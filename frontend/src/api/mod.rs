mod approvals;
pub mod client;
mod dashboard;
mod exceptions;
mod purchase_requests;
mod rules;
pub mod types;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
