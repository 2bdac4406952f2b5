pub mod catalog;
pub mod metadata;

pub use catalog::{BindingEntry, CredentialValue, ParseError, ServiceCatalog, USER_PROVIDED_KEY};
pub use metadata::ApplicationMetadata;
