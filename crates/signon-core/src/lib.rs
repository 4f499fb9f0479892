//! Core library for signon: configuration, credential validation, and the
//! HTTP authentication client with error classification.

pub mod auth;
pub mod config;
pub mod logging;
pub mod validate;
