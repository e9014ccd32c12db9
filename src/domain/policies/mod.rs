//! Domain Policies
//!
//! Business rules, kept free of I/O so they can be tested in isolation.

mod deployment_policy;

pub use deployment_policy::{decide, Decision, ProbeFailurePolicy, SkipReason};
