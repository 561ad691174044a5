//! HTTP clients for the services a survey run depends on.

pub mod google;
pub mod ollama;
