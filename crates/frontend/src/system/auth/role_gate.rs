//! Role gate
//!
//! Resolves once per activation whether the current user is restricted.
//! Failures never block rendering: the gate falls back to the most
//! restrictive role and does not retry.

use async_trait::async_trait;
use std::cell::Cell;
use std::rc::Rc;

use crate::shared::backend_error::BackendError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Role {
    Privileged,
    #[default]
    Restricted,
}

impl Role {
    pub fn from_restricted_flag(is_restricted: bool) -> Self {
        if is_restricted {
            Role::Restricted
        } else {
            Role::Privileged
        }
    }

    pub fn is_restricted(self) -> bool {
        self == Role::Restricted
    }
}

/// Authorization collaborator
#[async_trait(?Send)]
pub trait RoleSource {
    async fn fetch_is_restricted(&self) -> Result<bool, BackendError>;
}

pub struct RoleGate {
    source: Rc<dyn RoleSource>,
    resolved: Cell<Option<Role>>,
}

impl RoleGate {
    pub fn new(source: Rc<dyn RoleSource>) -> Self {
        Self {
            source,
            resolved: Cell::new(None),
        }
    }

    /// Role resolved so far, `None` before the first `resolve_role`
    pub fn resolved(&self) -> Option<Role> {
        self.resolved.get()
    }

    pub async fn resolve_role(&self) -> Role {
        if let Some(role) = self.resolved.get() {
            return role;
        }

        let role = match self.source.fetch_is_restricted().await {
            Ok(flag) => Role::from_restricted_flag(flag),
            Err(e) => {
                log::warn!("Role check failed, using restricted role: {e}");
                Role::default()
            }
        };
        self.resolved.set(Some(role));
        role
    }
}
