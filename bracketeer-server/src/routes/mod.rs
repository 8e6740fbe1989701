//! HTTP route handlers

pub mod fixtures;
pub mod status;
