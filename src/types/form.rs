//! Form view state types

use serde::{Deserialize, Serialize};

use super::Endpoint;

/// Placeholder for the add-endpoint text input
pub const INPUT_PLACEHOLDER: &str = "Add endpoint";

/// Helper text shown under the input while it holds an invalid URL
pub const INVALID_URL_HELPER_TEXT: &str = "Provide the URL of your Dev Spaces installation, e.g., https://devspaces.mycluster.mycorp.com";

/// Validity indicator for the pending add-endpoint input
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputStatus {
    /// Input is empty, nothing to validate yet
    #[default]
    Default,
    /// Input parses as an absolute URL
    Success,
    /// Input is non-empty but not a valid URL
    Error,
}

/// Snapshot of the form state for the rendering layer
///
/// The view consumes this together with the form's `set_default` and
/// `delete_endpoint` operations as its two row callbacks; rendering itself
/// is out of scope for this crate.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormView {
    /// Current endpoint list, in insertion order
    pub endpoints: Vec<Endpoint>,
    /// Pending input text
    pub new_endpoint_url: String,
    /// Validity state of the pending input
    pub new_endpoint_status: InputStatus,
    /// Whether the Add button is enabled
    pub add_enabled: bool,
    /// Inline validation message, present only in the error state
    pub helper_text: Option<&'static str>,
}
