//! Core operations.
//!
//! This module contains the business logic for modelkit commands,
//! separated from CLI argument parsing and output rendering.

pub mod build_model;

pub use build_model::build_model;
