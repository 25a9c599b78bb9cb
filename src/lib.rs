#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Compatibility tracking for an emulated games library.
//!
//! The crate holds the logic behind the test-record edit screen (field
//! reconciliation, preset application, validity), the screen controllers
//! that drive it, and file-backed implementations of the record, comment,
//! preset, device, and phone-database collaborators.

pub mod config;
pub mod form;
pub mod model;
pub mod session;
pub mod storage;
