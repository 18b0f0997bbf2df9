pub mod api;
pub mod role_gate;

pub use role_gate::{Role, RoleGate, RoleSource};
