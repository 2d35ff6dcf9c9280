//! Core library for the skypixel command-line utilities.
//!
//! This crate defines:
//! - Configuration & credential handling for the weather lookup
//! - Abstraction over weather providers (WeatherAPI.com)
//! - The image reveal pipeline (NPY load, reshape, rotate) and colormap
//! - Discriminated error types for both utilities
//!
//! It is used by `skypixel-cli`, but can also be reused by other binaries.

pub mod colormap;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod reveal;

pub use config::Config;
pub use error::{RevealError, WeatherError};
pub use model::WeatherReport;
pub use provider::WeatherProvider;
