//! Integration test crate for the curio marketplace.
//!
//! This crate exists solely to run integration tests that span the curio
//! crates. It has no public API - all functionality is in the test modules.

#![forbid(unsafe_code)]
