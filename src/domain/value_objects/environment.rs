//! Environment value object - the active deployment environment selector

/// Name of the active deployment environment (e.g. `local`, `testnet`, `mainnet`).
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    /// Variable consulted when no explicit environment is given
    pub const DEFAULT_VAR: &'static str = "VITE_APP_ENV";

    /// Build an environment from a raw value, rejecting blank input
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Resolve the environment from an explicit value, falling back to `var`.
    ///
    /// An explicit value wins even when the variable is also set. Blank
    /// values count as missing.
    pub fn resolve<F>(explicit: Option<&str>, var: &str, lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit
            .and_then(Self::new)
            .or_else(|| lookup(var).and_then(Self::new))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
