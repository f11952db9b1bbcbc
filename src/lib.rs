//! Core library for the loss-minimizer project.
//!
//! `loss` holds the search itself; the remaining modules are the
//! configuration, logging and parsing used by the binary.

pub mod config;
pub mod errors;
pub mod loss;
pub mod models;
pub mod utils;
