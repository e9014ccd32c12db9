//! Application Layer
//!
//! Use cases that sequence domain policies and ports.

pub mod check;

pub use check::{CheckOptions, CheckOutcome, CheckUseCase};
