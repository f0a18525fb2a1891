//! Business logic service layer

mod endpoint_settings;

pub use endpoint_settings::EndpointSettingsForm;
