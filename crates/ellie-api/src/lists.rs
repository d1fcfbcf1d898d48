//! List endpoints (`/v1/lists/*`).

use crate::client::EllieClient;
use crate::error::Result;
use crate::models::List;

impl EllieClient {
    /// Fetches all lists (`GET /v1/lists/getLists`).
    pub async fn get_lists(&self) -> Result<Vec<List>> {
        let body = self.get("/v1/lists/getLists").await?;
        Self::decode(&body)
    }
}
