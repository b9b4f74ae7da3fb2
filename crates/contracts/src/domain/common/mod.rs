//! Common types and traits for all aggregates

pub mod api_resource;

pub use api_resource::{contains_ci, ApiResource, ResourceId};
