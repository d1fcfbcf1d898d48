//! Label endpoints (`/v1/labels/*`).

use serde::{Deserialize, Serialize};

use crate::client::EllieClient;
use crate::error::Result;
use crate::models::Label;

/// Request body for `POST /v1/labels/createLabel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLabelRequest {
    pub name: String,
    /// Hex color, e.g. `#FF5733`.
    pub color: String,
}

impl CreateLabelRequest {
    /// Creates a label request.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

impl EllieClient {
    /// Fetches all labels (`GET /v1/labels/getLabels`).
    pub async fn get_labels(&self) -> Result<Vec<Label>> {
        let body = self.get("/v1/labels/getLabels").await?;
        Self::decode(&body)
    }

    /// Creates a label (`POST /v1/labels/createLabel`).
    pub async fn create_label(&self, request: &CreateLabelRequest) -> Result<Label> {
        let body = self.post("/v1/labels/createLabel", request).await?;
        Self::decode(&body)
    }
}
