//! Studio backend REST client.

mod client;
mod dto;

pub use client::{DEFAULT_API_URL, StudioApiClient};
