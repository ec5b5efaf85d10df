//! This crate implements the core data model for a content-addressed object store
//! that uses git's object format.

#![deny(warnings)]

pub mod object;
pub mod repo;
