//! Pages
//!
//! Top-level page components for each route.

pub mod collections;
pub mod home;

pub use collections::{Categories, Journals, Users};
pub use home::Home;
