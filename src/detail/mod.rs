//! Object detail and illustration fetching.

mod client;
pub mod fallback;
mod parse;
pub mod prompt;

pub use client::DetailClient;
pub use parse::{parse_detail, DetailError};
