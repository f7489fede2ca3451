//! # Workflows Module
//!
//! High-level entry points, each a single-pass procedure with no state kept between calls.
//!
//! - **Counting** ([`count`]) - Tally molecules of a topology by canonical identifier
//! - **Locating** ([`locate`]) - Find a force-field file among registered provider directories
//! - **Previewing** ([`preview`]) - Run a short, clock-bounded simulation writing a trajectory

pub mod count;
pub mod locate;
pub mod preview;
