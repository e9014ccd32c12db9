//! Configuration provider implementations.

mod artifact_provider;

pub use artifact_provider::ArtifactConfigProvider;
