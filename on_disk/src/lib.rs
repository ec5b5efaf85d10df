//! This crate provides a repository that stores content on the local file system.
//!
//! **IMPORTANT NOTE:** This is intended as a reference implementation largely
//! for testing purposes and may not necessarily handle all of the edge cases that
//! the traditional `git` command-line interface will handle.
//!
//! That said, it does intentionally use the same `.git` folder format as
//! command-line git, so loose objects written here can be read by git and
//! vice versa.

#![deny(warnings)]

pub mod codec;
pub mod config;

mod on_disk_repo;
pub use on_disk_repo::{OnDiskRepo, SUPPORTED_FORMAT_VERSION};

mod temp_repo;
pub use temp_repo::TempRepo;
