use serde::{Deserialize, Serialize};

/// Answer of the role check for the current user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRoleResponse {
    #[serde(rename = "isRestricted")]
    pub is_restricted: bool,
}
