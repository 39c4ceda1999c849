//! Test utilities shared across the gonzo workspace
//!
//! This crate provides common testing infrastructure including:
//! - Temporary git repositories ([`GitRepoTestGuard`])
//! - Remote-tracking fixtures for ahead/behind and gone scenarios
//!   ([`remote`])
//! - XDG directory isolation ([`EnvTestGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod git;
pub mod remote;

// Re-export commonly used items
pub use env::EnvTestGuard;
pub use git::{GitRepoTestGuard, checkout_branch, create_branch, create_commit};
pub use remote::{BareRemote, forget_remote_branch, track_remote_branch};
