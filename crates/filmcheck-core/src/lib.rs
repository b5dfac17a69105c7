// Rust guideline compliant 2026-02-06

//! Film Checker Core Library
//!
//! This crate provides the foundational components for the Film Checker lookup tool:
//! - Data models (Candidate, Query, title and person detail records)
//! - Identifier recognition (`tt`/`nm` prefixed ids)
//! - Disambiguation resolver (exact match scan, choice, selection)
//! - Configuration loading and validation
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod resolver;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use identity::{is_identifier, IdKind};
pub use models::{
    Candidate, Certificate, Country, CriticReview, DetailRecord, KindFilter, KnownFor, Language,
    NameCredit, NameRef, PersonDetail, Query, Rating, TitleDetail,
};
pub use resolver::{
    exact_matches, resolve, resolve_with, select, ChoiceScope, ResolutionOutcome,
};
