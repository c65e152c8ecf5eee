//! Hackathon directory domain logic.
//!
//! Everything in this crate is pure and synchronous except the
//! [`store::ParticipantStore`] trait and the announcement continuation:
//!
//! - [`shuffle`]: Fisher-Yates shuffle and random sampling.
//! - [`avatar`]: non-repeating fruit avatar draws.
//! - [`grid`]: slot layout for the randomized card grid.
//! - [`projects`]: project grouping (by name) and deduplication (by URL).
//! - [`validation`] / [`upload`]: submission and avatar checks.
//! - [`render`]: the per-request render pass tying it all together.

pub mod announce;
pub mod avatar;
pub mod error;
pub mod grid;
pub mod participant;
pub mod projects;
pub mod render;
pub mod shuffle;
pub mod store;
pub mod types;
pub mod upload;
pub mod validation;
