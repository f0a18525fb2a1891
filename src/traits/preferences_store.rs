//! Preferences storage abstract Trait

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::SettingsResult;
use crate::types::Endpoint;

/// Preferences Store Trait
///
/// Holds the authoritative copy of the endpoint list. The form component
/// never patches stored state: every mutation writes the full list and then
/// re-reads it.
///
/// Platform implementations:
/// - Options page: extension preferences storage (`storage.sync`)
/// - Tests / all platforms: `InMemoryPreferencesStore`
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Get the stored endpoint list, in insertion order
    async fn get_endpoints(&self) -> SettingsResult<Vec<Endpoint>>;

    /// Replace the entire stored endpoint list
    ///
    /// # Arguments
    /// * `endpoints` - the complete new list
    async fn save_endpoints(&self, endpoints: &[Endpoint]) -> SettingsResult<()>;
}

/// In-memory preferences store
///
/// Default implementation, available on all platforms.
#[derive(Clone, Default)]
pub struct InMemoryPreferencesStore {
    endpoints: Arc<RwLock<Vec<Endpoint>>>,
}

impl InMemoryPreferencesStore {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an initial endpoint list
    #[must_use]
    pub fn with_endpoints(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints: Arc::new(RwLock::new(endpoints)),
        }
    }
}

#[async_trait]
impl PreferencesStore for InMemoryPreferencesStore {
    async fn get_endpoints(&self) -> SettingsResult<Vec<Endpoint>> {
        Ok(self.endpoints.read().await.clone())
    }

    async fn save_endpoints(&self, endpoints: &[Endpoint]) -> SettingsResult<()> {
        *self.endpoints.write().await = endpoints.to_vec();
        Ok(())
    }
}
