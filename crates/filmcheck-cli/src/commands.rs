// Rust guideline compliant 2026-02-06

//! Command implementations for the Film Checker CLI.

pub mod lookup;
