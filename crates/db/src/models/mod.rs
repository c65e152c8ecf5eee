//! Database row structs.

pub mod participant;
