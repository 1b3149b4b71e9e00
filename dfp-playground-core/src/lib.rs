//! DFP Playground Core Library
//!
//! Query orchestration for the playground frontends:
//! - Service catalog (one tab per queryable service)
//! - Network context (load once, shared selection)
//! - Tab orchestration (query lifecycle, pagination plans, page replay)
//!
//! Transport is abstracted behind [`PlaygroundApi`](dfp_playground_api::PlaygroundApi);
//! the core never builds an HTTP client itself.

pub mod catalog;
pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::{all_services, ServiceDescriptor, ServiceRoutes, SubRoute};
pub use error::{CoreError, CoreResult};
pub use services::{NetworkContext, PendingRequest, ServiceContext, TabOrchestrator};
pub use types::{QueryDefaults, Tab};
