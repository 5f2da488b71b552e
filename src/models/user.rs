use serde::{Deserialize, Serialize};

// Read-only from this service's perspective; rows are managed by the
// account service that also issues the caller's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Caller resolved by the authentication middleware from the gateway header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentUser {
    pub id: i32,
}
