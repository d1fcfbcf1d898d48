//! Ellie planner API client library
//!
//! A thin async client for the Ellie daily planner REST API: one method per
//! endpoint, one request per call.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use ellie_api_rs::prelude::*;
//! ```
//!
//! This re-exports [`EllieClient`](client::EllieClient), the error types, the
//! request bodies and the data models.

pub mod client;
pub mod error;
pub mod labels;
pub mod lists;
pub mod models;
pub mod prelude;
pub mod tasks;
pub mod users;
