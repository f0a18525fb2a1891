//! URL validation and normalization helpers for the add-endpoint input.

use url::Url;

use crate::error::{SettingsError, SettingsResult};

/// Parse `input` as an absolute URL, or fail with `InvalidUrl`.
///
/// For callers that want a hard check; the form itself only tracks the
/// tri-state input status and never returns this error.
pub fn validate_url(input: &str) -> SettingsResult<Url> {
    Url::parse(input).map_err(|e| SettingsError::InvalidUrl(format!("{input}: {e}")))
}

/// Whether `input` parses as a syntactically valid absolute URL.
///
/// Purely a grammar check, not a reachability check.
#[must_use]
pub fn is_valid_url(input: &str) -> bool {
    validate_url(input).is_ok()
}

/// Strip all trailing `/` characters from an endpoint URL.
///
/// Applied to user input before the endpoint is stored, so
/// `"https://x.com///"` becomes `"https://x.com"`. Stripping is
/// unconditional: it applies even when the trailing slash belongs to a
/// meaningful path separator.
#[must_use]
pub fn sanitize_endpoint_url(input: &str) -> String {
    input.trim_end_matches('/').to_string()
}
