// Rust guideline compliant 2026-02-09

//! Shared application services for Film Checker.
//!
//! This crate provides the HTTP-backed suggestion and detail sources,
//! the lookup workflow that drives the resolver, and standardized
//! error envelopes.

pub mod client;
pub mod error;
pub mod graphql;
pub mod lookup;
pub mod response;
pub mod sources;
pub mod suggestion;

pub use client::ApiClient;
pub use error::{AppError, ErrorCode, Result};
pub use lookup::{lookup, Interaction, LookupRequest, LookupResult, Notice};
pub use response::ErrorEnvelope;
pub use sources::{DetailSource, SuggestionSource};
