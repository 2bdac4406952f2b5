//! Infrastructure layer — concrete implementations of application port
//! traits.
//!
//! All I/O-performing code lives here: process execution, environment
//! reading, the package-helper adapter, and the interpreter probe.
//! Imports from `crate::domain` and `crate::application::ports` are
//! allowed; imports from `crate::commands` or `crate::output` are
//! forbidden.

pub mod command_runner;
pub mod env;
pub mod installer;
pub mod probe;
