//! HTTP shell around the product listing: config, catalog source, routing,
//! and HTML rendering.

pub mod app;
pub mod config;
pub mod source;
pub mod views;
