//! Utility functions

pub mod url;
