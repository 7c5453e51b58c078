//! Generative Language API boundary.

mod client;
mod types;

pub use client::*;
pub use types::*;
