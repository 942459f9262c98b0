//! seedbed - a strict, schema-driven seeding and validation engine
//!
//! Declare which attributes a structured value has, which of them are
//! required, and which are governed by a nested schema; then construct
//! validated instances from heterogeneous raw input (a JSON mapping or
//! any duck-typed source of attribute reads).
//!
//! # Design Principles
//!
//! - Presence validation only: leaf values pass through unchanged,
//!   no coercion, no defaults, no leaf type checks
//! - Fail-fast: construction yields a fully valid instance or exactly
//!   one descriptive error; no partial instance ever escapes
//! - Deterministic: attributes keep declaration order, validation and
//!   error selection follow it

pub mod instance;
pub mod schema;
pub mod seed;
