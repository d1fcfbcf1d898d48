//! API data types for the Ellie planner.
//!
//! Flat DTOs mirroring the JSON shapes the API sends and receives.

mod common;
mod label;
mod task;
mod user;

pub use common::*;
pub use label::*;
pub use task::*;
pub use user::*;
