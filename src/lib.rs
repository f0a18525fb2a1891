//! Endpoint Settings Core Library
//!
//! Provides the business logic behind the endpoint settings form of the
//! Dev Spaces extension options page, including:
//! - Endpoint list state and mutations (`EndpointSettingsForm`)
//! - Syntactic URL validation for the add-endpoint input
//! - Persistence through the `PreferencesStore` trait
//!
//! This library is designed to be platform-independent, abstracting the
//! preferences storage layer through a trait so the options page, tests,
//! and any other host can inject their own storage implementation.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{SettingsError, SettingsResult};
pub use services::EndpointSettingsForm;
pub use traits::{InMemoryPreferencesStore, PreferencesStore};
pub use types::{Endpoint, FormView, InputStatus};
