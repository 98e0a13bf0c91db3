//! # mgd-core
//!
//! Core types and derived-state logic for Maggid.
//!
//! This crate provides the foundational types shared across all Maggid crates:
//! - Entity structs for all domain objects (documents, pipeline items, rituals, etc.)
//! - Enums with snake_case serialization and SQL string forms
//! - ID prefix constants
//! - The pure derived-state routines: markdown section parsing, capture-streak
//!   calculation, Shas progress arithmetic, topic grouping, and nudge types

pub mod entities;
pub mod enums;
pub mod ids;
pub mod markdown;
pub mod nudge;
pub mod progress;
pub mod streak;
pub mod topics;
