//! # Gonzo CLI Library
//!
//! Argument parsing and the interactive command shell for the `gonzo`
//! binary.

pub mod cli;
pub mod shell;
