//! DigiInfluencer Studio - a terminal client for the AI influencer content studio.
//!
//! This crate provides persona management, campaign management and asset
//! generation screens on top of the studio's HTTP API, with a clean
//! architecture split into domain, application, infrastructure and
//! presentation layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "digi-studio";
