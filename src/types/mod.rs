//! Endpoint and form state type definitions

mod endpoint;
mod form;

pub use endpoint::Endpoint;
pub use form::{FormView, InputStatus, INPUT_PLACEHOLDER, INVALID_URL_HELPER_TEXT};
