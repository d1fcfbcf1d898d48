//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```
//! use ellie_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - EllieClient, EllieClientBuilder (API client)
//! // - Error, ApiError, Result (error handling)
//! // - CreateTaskRequest, UpdateTaskRequest, CreateLabelRequest, ... (request bodies)
//! // - Task, Label, List, User, ApiUsage, LenientString (data models)
//! ```

// Client types
pub use crate::client::{EllieClient, EllieClientBuilder};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Request bodies
pub use crate::labels::CreateLabelRequest;
pub use crate::tasks::{CreateTaskRequest, DeleteTaskRequest, SearchRequest, UpdateTaskRequest};

// Data models
pub use crate::models::{
    ApiUsage, ApiUsageRateLimit, ApiUsageToday, Label, LenientString, List, Task, User,
};
