//! Shared test utilities for gitoscope integration tests
//!
//! Real git repositories in temporary directories, driven by the `git` binary.

pub mod assertions;
pub mod fixtures;
pub mod repository;
