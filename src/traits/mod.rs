//! Storage layer abstraction trait definition

mod preferences_store;

pub use preferences_store::{InMemoryPreferencesStore, PreferencesStore};
