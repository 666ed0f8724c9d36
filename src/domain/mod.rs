//! Domain Layer
//!
//! The layout merge core. All I/O goes through the traits in `ports`.
//!
//! ## Structure
//!
//! - `entities/` - Handles, themes, stores, layout files, design abstractions
//! - `value_objects/` - Cache keys, runtime mode, config warnings
//! - `services/` - File layout document, source aggregation, merge engine
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
