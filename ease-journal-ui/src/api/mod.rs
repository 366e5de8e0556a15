//! Browser API Access

mod client;

pub use client::api_client;
