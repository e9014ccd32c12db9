//! Contract value objects - tracked role and address parsing

use alloy::primitives::Address;

use crate::error::{CheckError, CheckResult};

/// Suffix that turns a role name into its config field name
const ADDRESS_FIELD_SUFFIX: &str = "ContractAddress";

/// Logical role of a contract, as used in deployment results.
///
/// The matching config field is the role followed by `ContractAddress`,
/// e.g. `simpleAccountFactory` → `simpleAccountFactoryContractAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractRole(String);

impl ContractRole {
    pub const SIMPLE_ACCOUNT_FACTORY: &'static str = "simpleAccountFactory";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the config field that stores this role's address
    pub fn config_key(&self) -> String {
        format!("{}{}", self.0, ADDRESS_FIELD_SUFFIX)
    }
}

impl Default for ContractRole {
    fn default() -> Self {
        Self::new(Self::SIMPLE_ACCOUNT_FACTORY)
    }
}

impl std::fmt::Display for ContractRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a config field name holds a contract address
pub fn is_address_field(key: &str) -> bool {
    key.len() > ADDRESS_FIELD_SUFFIX.len() && key.ends_with(ADDRESS_FIELD_SUFFIX)
}

/// Parse a contract address field value.
///
/// Empty strings are the "no address" sentinel and yield `None`. Anything
/// else must be `0x` followed by exactly 40 hex digits; checksum casing is
/// not enforced.
pub fn parse_address(field: &str, value: &str) -> CheckResult<Option<Address>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let invalid = || CheckError::InvalidAddress {
        field: field.to_string(),
        value: value.to_string(),
    };

    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(invalid)?;
    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    digits.parse::<Address>().map(Some).map_err(|_| invalid())
}
