//! Opportunity line items
//!
//! - backend.rs: collaborator contract (fetch, delete, update stock)
//! - api.rs: HTTP implementation of the contract
//! - error.rs: component-boundary errors
//! - ui/list: view model, mutation coordinator and the table component

pub mod api;
pub mod backend;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;
