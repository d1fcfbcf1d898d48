//! User endpoints (`/v1/users/*`).

use crate::client::EllieClient;
use crate::error::Result;
use crate::models::{ApiUsage, User};

impl EllieClient {
    /// Fetches the user that owns the API key (`GET /v1/users/me`).
    pub async fn get_current_user(&self) -> Result<User> {
        let body = self.get("/v1/users/me").await?;
        Self::decode(&body)
    }

    /// Fetches usage statistics for the API key (`GET /v1/users/apiUsage`).
    pub async fn get_api_usage(&self) -> Result<ApiUsage> {
        let body = self.get("/v1/users/apiUsage").await?;
        Self::decode(&body)
    }
}
