//! Domain layer — pure resolution logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod commands;
pub mod credentials;
pub mod error;
pub mod gate;
pub mod identity;
pub mod resolved;
pub mod select;

pub use commands::{CommandLine, RuntimeDiscovery, ServiceCommand};
pub use credentials::ControllerCredentials;
pub use error::ResolutionWarning;
pub use gate::{SERVICE_TYPE_KEY, should_activate};
pub use identity::{IdentityTriplet, derive_identity};
pub use resolved::ResolvedConfiguration;
pub use select::{SelectedBinding, select_binding};
