//! Functional core for the categories service.
//!
//! Pure domain types, validation, statistics and the ports (traits) that the
//! server crate implements. Nothing in here performs I/O.

pub mod cache;
pub mod category;
pub mod events;
pub mod storage;
