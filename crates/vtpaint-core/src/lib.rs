//! vtpaint Core
//!
//! Error definitions shared by the vtpaint crates.
//!
//! # Overview
//!
//! - [`ColorError`] - Why a color string was rejected by the strict parsers
//! - [`VtpaintError`] - Top-level error for configuration and CLI operations

pub mod error;

pub use error::{ColorError, Result, VtpaintError};
