//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `analysis` - Pure domain services for multi-criteria ranking (TOPSIS, SPOTIS)

pub mod analysis;
pub mod foundation;
