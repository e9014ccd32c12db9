//! Config Artifacts
//!
//! Encoding and persistence of the per-network TypeScript config modules.

mod codec;
mod writer;

pub use codec::{extract_object_literal, parse_artifact, render_artifact};
pub use writer::TsModuleWriter;
