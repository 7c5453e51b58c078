//! Domain models for StarGazer.
//!
//! # Core Concepts
//!
//! ## Static Catalog
//!
//! - [`CatalogEntry`]: One observable object (constellation, nebula or cluster).
//! - [`MonthEntry`]: A month of the calendar with its season and featured objects.
//!
//! The catalog is defined once at process start and never mutated.
//!
//! ## Per-View Data
//!
//! These are created fresh every time a detail view opens and discarded when it closes:
//!
//! - [`DetailResponse`]: Narrative description generated for one object.
//! - [`Difficulty`]: Observation difficulty carried by a [`DetailResponse`].

mod catalog;
mod detail;

pub use catalog::*;
pub use detail::*;
