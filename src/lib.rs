//! appmerge: Sparse Patch Merging for Application Records
//!
//! Merges partial-update payloads into application records: overwrite-if-present
//! scalar fields, pluggable merging of nested configuration blocks, and ordered
//! ADD/REMOVE tag operations. Collaborators are resolved through an explicit,
//! typed service registry.

pub mod application;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod patch;
pub mod registry;
pub mod service;
pub mod store;
