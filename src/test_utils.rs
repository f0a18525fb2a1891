//! Test helper module
//!
//! Provides a mock store implementation and convenient factory methods.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{SettingsError, SettingsResult};
use crate::services::EndpointSettingsForm;
use crate::traits::PreferencesStore;
use crate::types::Endpoint;

// ===== MockPreferencesStore =====

pub struct MockPreferencesStore {
    endpoints: RwLock<Vec<Endpoint>>,
    /// If Some, `get_endpoints` returns this error
    get_error: RwLock<Option<String>>,
    /// If Some, `save_endpoints` returns this error
    save_error: RwLock<Option<String>>,
}

impl MockPreferencesStore {
    pub fn with_endpoints(endpoints: Vec<Endpoint>) -> Self {
        Self {
            endpoints: RwLock::new(endpoints),
            get_error: RwLock::new(None),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_get_error(&self, err: Option<String>) {
        *self.get_error.write().await = err;
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    /// Snapshot of the persisted list, bypassing error injection
    pub async fn stored(&self) -> Vec<Endpoint> {
        self.endpoints.read().await.clone()
    }
}

#[async_trait]
impl PreferencesStore for MockPreferencesStore {
    async fn get_endpoints(&self) -> SettingsResult<Vec<Endpoint>> {
        if let Some(ref msg) = *self.get_error.read().await {
            return Err(SettingsError::StorageError(msg.clone()));
        }
        Ok(self.endpoints.read().await.clone())
    }

    async fn save_endpoints(&self, endpoints: &[Endpoint]) -> SettingsResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(SettingsError::StorageError(msg.clone()));
        }
        *self.endpoints.write().await = endpoints.to_vec();
        Ok(())
    }
}

// ===== Factory methods =====

/// Create a form backed by an empty mock store
pub fn create_test_form() -> (EndpointSettingsForm, Arc<MockPreferencesStore>) {
    create_test_form_with(Vec::new())
}

/// Create a form backed by a mock store seeded with `endpoints`
pub fn create_test_form_with(
    endpoints: Vec<Endpoint>,
) -> (EndpointSettingsForm, Arc<MockPreferencesStore>) {
    let store = Arc::new(MockPreferencesStore::with_endpoints(endpoints));
    let form = EndpointSettingsForm::new(store.clone());
    (form, store)
}

/// Create an `Endpoint` for test fixtures
pub fn endpoint(url: &str, active: bool, readonly: bool) -> Endpoint {
    Endpoint {
        url: url.to_string(),
        active,
        readonly,
    }
}
