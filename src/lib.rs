//! derma - terminal front end for a clinic's record lists and skin quiz
//!
//! Library crate exposing the small components used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod quiz;
pub mod record;
pub mod snapshot;

pub mod ui;
