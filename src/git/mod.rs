//! Git subprocess access.

pub mod runner;

pub use runner::{GitCommand, GitRunner, SystemGit};
