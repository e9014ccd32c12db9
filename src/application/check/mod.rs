//! Check Module
//!
//! Ensures the tracked contract exists on the active network.
//!
//! ## Structure
//!
//! - `options` - Per-run settings (`CheckOptions`)
//! - `outcome` - Terminal states (`CheckOutcome`)
//! - `use_case` - Orchestration (`CheckUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use factory_check::application::check::{CheckOptions, CheckUseCase};
//!
//! let use_case = CheckUseCase::new(provider, probe, deployer, writer);
//! let outcome = use_case.execute(&CheckOptions::new(environment))?;
//! ```

mod options;
mod outcome;
mod use_case;

pub use options::CheckOptions;
pub use outcome::CheckOutcome;
pub use use_case::CheckUseCase;

#[cfg(test)]
mod tests;
