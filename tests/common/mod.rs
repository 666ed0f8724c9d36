//! Common test utilities for layout-merge integration and CLI tests.
//!
//! - `Storefront`: isolated storefront tree in a temp directory
//! - Fixtures: layout files, stored updates and configuration

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
