use async_trait::async_trait;
use contracts::system::auth::UserRoleResponse;
use gloo_net::http::Request;

use super::role_gate::RoleSource;
use crate::shared::api_utils::{api_base, rejection};
use crate::shared::backend_error::BackendError;

/// Ask the backend whether the current user has the restricted role
pub async fn fetch_user_role(port: u16) -> Result<UserRoleResponse, BackendError> {
    let response = Request::get(&format!("{}/api/system/auth/role", api_base(port)))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response
        .json::<UserRoleResponse>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

/// `RoleSource` backed by the HTTP API
pub struct HttpRoleSource {
    port: u16,
}

impl HttpRoleSource {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait(?Send)]
impl RoleSource for HttpRoleSource {
    async fn fetch_is_restricted(&self) -> Result<bool, BackendError> {
        fetch_user_role(self.port).await.map(|r| r.is_restricted)
    }
}
