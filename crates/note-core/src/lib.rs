//! # note-core
//!
//! Core types and error types for NeuralNote.
//!
//! This crate provides the foundational types shared across all NeuralNote crates:
//! - Entity structs for persisted domain objects (users, habits, journal entries,
//!   habit completions)
//! - The fixed [`Emotion`](enums::Emotion) label set and its declaration order
//! - Request/response shapes for reflections, dashboards and global statistics
//! - Request-layer validation helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod validation;
