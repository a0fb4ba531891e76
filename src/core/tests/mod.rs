//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Filter predicate and ordering tests
//! - Script substitution tests
//! - Facet extraction tests

#[cfg(test)]
mod filter_tests;
