//! Stamp correction pipeline for the worktime engine.
//!
//! This module contains the stages that turn one day's raw stamps into a
//! worked duration: same-kind run correction, day boundary correction, and
//! aggregation of (In, Out) pairs. Each stage takes the sequence by value and
//! returns the corrected one, recording what it changed in a
//! [`NotificationLog`](crate::models::NotificationLog).

mod aggregation;
mod boundary;
mod sequence;

pub use aggregation::{Aggregation, aggregate, total_worked};
pub use boundary::fix_boundaries;
pub use sequence::correct_sequence;
