//! Endpoint settings form component
//!
//! Holds the transient copy of the endpoint list plus the add-endpoint input
//! state, and runs every mutation as save-full-list-then-refetch so the
//! displayed state never diverges from storage.

use std::sync::Arc;

use crate::error::SettingsResult;
use crate::traits::PreferencesStore;
use crate::types::{Endpoint, FormView, InputStatus, INVALID_URL_HELPER_TEXT};
use crate::utils::url::{is_valid_url, sanitize_endpoint_url};

/// Endpoint settings form
///
/// The authoritative endpoint list lives in the injected store; this
/// component keeps a copy that is fully replaced by a refetch on
/// initialization and after every mutation.
pub struct EndpointSettingsForm {
    store: Arc<dyn PreferencesStore>,
    endpoints: Vec<Endpoint>,
    new_endpoint_url: String,
    new_endpoint_status: InputStatus,
}

impl EndpointSettingsForm {
    /// Create a form instance with empty state
    #[must_use]
    pub fn new(store: Arc<dyn PreferencesStore>) -> Self {
        Self {
            store,
            endpoints: Vec::new(),
            new_endpoint_url: String::new(),
            new_endpoint_status: InputStatus::Default,
        }
    }

    // ===== State accessors =====

    /// Current endpoint list, in insertion order
    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Pending add-endpoint input text
    #[must_use]
    pub fn new_endpoint_url(&self) -> &str {
        &self.new_endpoint_url
    }

    /// Validity state of the pending input
    #[must_use]
    pub fn new_endpoint_status(&self) -> InputStatus {
        self.new_endpoint_status
    }

    /// Whether the Add button is enabled: input non-empty and not invalid
    #[must_use]
    pub fn can_add(&self) -> bool {
        !self.new_endpoint_url.is_empty() && self.new_endpoint_status != InputStatus::Error
    }

    /// Build a snapshot of the form state for the rendering layer
    #[must_use]
    pub fn view(&self) -> FormView {
        FormView {
            endpoints: self.endpoints.clone(),
            new_endpoint_url: self.new_endpoint_url.clone(),
            new_endpoint_status: self.new_endpoint_status,
            add_enabled: self.can_add(),
            helper_text: (self.new_endpoint_status == InputStatus::Error)
                .then_some(INVALID_URL_HELPER_TEXT),
        }
    }

    // ===== Operations =====

    /// Load the endpoint list on first render
    ///
    /// A fetch failure is logged and swallowed; the list stays empty until
    /// the next successful refetch.
    pub async fn initialize(&mut self) {
        if let Err(e) = self.refresh().await {
            log::error!("Failed to load endpoints: {e}");
        }
    }

    /// Refetch the endpoint list and replace the local copy
    pub async fn refresh(&mut self) -> SettingsResult<()> {
        self.endpoints = self.store.get_endpoints().await?;
        Ok(())
    }

    /// Update the pending input text and revalidate it
    ///
    /// Empty input resets to `Default`; otherwise the text must parse as an
    /// absolute URL to reach `Success`. Purely syntactic, no reachability
    /// check.
    pub fn update_input_text(&mut self, new_url: &str) {
        self.new_endpoint_status = if new_url.is_empty() {
            InputStatus::Default
        } else if is_valid_url(new_url) {
            InputStatus::Success
        } else {
            InputStatus::Error
        };
        self.new_endpoint_url = new_url.to_string();
    }

    /// Append the pending input as a new endpoint and persist the list
    ///
    /// Silently does nothing while `can_add` is false. The input is
    /// normalized by stripping all trailing `/` characters, then stored as
    /// an inactive, non-readonly entry appended at the end. On success the
    /// input text and status are reset.
    pub async fn add_endpoint(&mut self) -> SettingsResult<()> {
        if !self.can_add() {
            return Ok(());
        }

        let sanitized = sanitize_endpoint_url(&self.new_endpoint_url);
        let mut new_endpoints = self.endpoints.clone();
        new_endpoints.push(Endpoint::new(sanitized));

        self.store.save_endpoints(&new_endpoints).await?;
        self.refresh().await?;

        self.new_endpoint_url.clear();
        self.new_endpoint_status = InputStatus::Default;
        Ok(())
    }

    /// Mark `endpoint` as the default and persist the list
    ///
    /// Every other entry becomes inactive. A stale argument that no longer
    /// matches any entry deactivates the whole list; that is a quiet
    /// no-activation, not an error.
    pub async fn set_default(&mut self, endpoint: &Endpoint) -> SettingsResult<()> {
        let mut new_endpoints = self.endpoints.clone();
        for e in &mut new_endpoints {
            e.active = *e == *endpoint;
        }

        self.store.save_endpoints(&new_endpoints).await?;
        self.refresh().await
    }

    /// Remove `endpoint` from the list and persist
    ///
    /// A stale argument that matches no entry leaves the list unchanged.
    pub async fn delete_endpoint(&mut self, endpoint: &Endpoint) -> SettingsResult<()> {
        let new_endpoints: Vec<Endpoint> = self
            .endpoints
            .iter()
            .filter(|e| *e != endpoint)
            .cloned()
            .collect();

        self.store.save_endpoints(&new_endpoints).await?;
        self.refresh().await
    }
}
