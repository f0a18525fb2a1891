//! Endpoint type definition

use serde::{Deserialize, Serialize};

/// One configured service endpoint
///
/// Operations on the endpoint list identify entries by whole-value equality
/// (all three fields), not by URL alone. URL uniqueness is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoint {
    /// Endpoint URL, normalized (no trailing `/` characters)
    pub url: String,
    /// Whether this is the default endpoint (at most one per list)
    pub active: bool,
    /// Entries the UI must not let the user delete or change; preserved
    /// verbatim on save, never mutated by this crate
    pub readonly: bool,
}

impl Endpoint {
    /// Create a user-added endpoint (inactive, not readonly)
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url,
            active: false,
            readonly: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Field names are the stored document format shared with the options
    // page; renaming them breaks existing preferences.
    #[test]
    fn stored_document_shape() {
        let endpoint = Endpoint {
            url: "https://devspaces.mycluster.mycorp.com".to_string(),
            active: true,
            readonly: false,
        };

        let json = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "url": "https://devspaces.mycluster.mycorp.com",
                "active": true,
                "readonly": false,
            })
        );

        let back: Endpoint = serde_json::from_value(json).unwrap();
        assert_eq!(back, endpoint);
    }
}
