//! # Gonzo Core Library
//!
//! The repository-state and branch-lifecycle model behind the `gonzo`
//! shell: repository discovery, the branch catalog with tracking and gone
//! status, safe branch mutations, and delegation of network operations and
//! commits.

pub mod catalog;
pub mod commit;
pub mod config;
pub mod consts;
pub mod error;
pub mod lifecycle;
pub mod locator;
pub mod output;
pub mod process;
pub mod prompt;
pub mod remote;

// Re-export main types for the binary
pub use catalog::{BranchEntry, BranchRef, TrackingStatus, list_branches};
pub use config::{ConfigDirs, Settings};
pub use error::{DelegationError, LocateError, SelectionError};
pub use lifecycle::{BranchLifecycle, DeleteOutcome, GoneCleanup};
pub use locator::{RepositoryHandle, locate, locate_from_current_dir};
pub use output::{ColorMode, print_branches, print_error, print_info, print_success, print_warning};
pub use process::{Delegate, DelegatedCommand, ProcessDelegate};
pub use prompt::{LineSource, ScriptedLines, StdinLines};
pub use remote::RemoteSync;
