//! # mz-core
//!
//! Core types, ID generation, and error types for MZ.
//!
//! This crate provides the foundational types shared across all MZ crates:
//! - Entity structs for the persisted domain objects (tasks, transcript messages)
//! - Priority, category and role enums
//! - Task ID prefix and generation
//! - Cross-cutting error types, including the task validation failure
//! - Lenient timestamp and blank-field deserialization for memory files written
//!   by older versions

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lenient;
pub mod timestamps;
