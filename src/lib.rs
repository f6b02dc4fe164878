//! Client for a celebrity look-alike recognition service.
//!
//! [`adapters::LookalikeClient`] uploads a JPEG to `{base_url}/upload_lookalike`
//! and returns the ranked matches as a [`core::models::LookupOutcome`].

pub mod adapters;
pub mod core;
pub mod global_constants;
