//! Command-line front end for the PIN strength engine.
//!
//! The engine itself lives in `pin_domain`; this crate owns configuration,
//! logging, input normalization and output rendering.

pub mod config;
pub mod mapper;
pub mod service;
