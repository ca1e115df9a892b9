//! Worktime Engine
//!
//! This crate computes the time an employee worked on a day from raw
//! clock-in/clock-out stamps. Malformed days are repaired rather than
//! rejected: duplicated stamps are merged, same-kind runs are split, and
//! missing day boundaries are filled in. Every repair is reported as a
//! notification next to the result.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod correction;
pub mod error;
pub mod models;
pub mod reports;
pub mod source;
