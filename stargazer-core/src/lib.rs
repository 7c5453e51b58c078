//! Core data for StarGazer: the static calendar, browse logic, view state
//! and share text. Nothing in this crate performs I/O.

pub mod browse;
pub mod catalog;
pub mod models;
pub mod share;
pub mod view;
