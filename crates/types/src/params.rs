//! Local view of the consensus parameters.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockParams {
    pub max_bytes: i64,
    pub max_gas: i64,
}

/// Whitelist of validator public key types, e.g. `"ed25519"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatorParams {
    pub pub_key_types: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionParams {
    pub app: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbciParams {
    /// Height from which vote extensions are enabled. `None` unless the
    /// consensus subsystem sent ABCI parameters at all.
    pub vote_extensions_enable_height: Option<i64>,
}

/// Limits and feature flags governing block validity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsensusParams {
    pub block: BlockParams,
    pub validator: ValidatorParams,
    pub version: VersionParams,
    pub abci: AbciParams,
}

impl ConsensusParams {
    pub fn allows_key_type(&self, key_type: &str) -> bool {
        self.validator.pub_key_types.iter().any(|t| t == key_type)
    }
}
