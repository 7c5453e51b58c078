//! StarGazer: a month-by-month stargazing calendar with AI-generated object
//! details.
//!
//! The static calendar and browse logic live in `stargazer-core`; this crate
//! adds the generative service client, the detail view controller, the HTTP
//! API and the command line front end.

pub mod api;
pub mod config;
pub mod controller;
pub mod detail;
pub mod gemini;
pub mod render;

pub use stargazer_core::{browse, catalog, models, share, view};
