//! Shapes owned by the external consensus subsystem.
//!
//! The codec only threads these through or hands them to an adapter; their
//! validity rules live with the adapter, not here.

use codec::{Decode, Encode};

use crate::hash::Hash;
use crate::Address;

/// Raw ed25519 public key bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PubKey(pub [u8; 32]);

impl PubKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validator {
    pub address: Address,
    pub pub_key: PubKey,
    pub voting_power: i64,
    pub proposer_priority: i64,
}

/// The parties authorised to sign, with an optional designated proposer.
///
/// A set without a proposer can be built and encoded, but it is not
/// reconstructible on decode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatorSet {
    pub validators: Vec<Validator>,
    pub proposer: Option<Validator>,
}

impl ValidatorSet {
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Sum of voting power, saturating on overflow.
    pub fn total_voting_power(&self) -> i64 {
        self.validators
            .iter()
            .fold(0i64, |acc, v| acc.saturating_add(v.voting_power))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartSetHeader {
    pub total: u32,
    pub hash: Hash,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockId {
    pub hash: Hash,
    pub part_set_header: PartSetHeader,
}

impl BlockId {
    /// True when neither the block hash nor the part set header is set.
    pub fn is_zero(&self) -> bool {
        self.hash.is_zero() && self.part_set_header == PartSetHeader::default()
    }
}

/// Protocol versions negotiated by consensus.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct ConsensusVersion {
    pub block: u64,
    pub app: u64,
}

/// Version block stored in chain state. The wire and domain shapes are the
/// same, so the codec copies it as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct StateVersion {
    pub consensus: ConsensusVersion,
    pub software: String,
}

/// Seconds and nanoseconds since the unix epoch, UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }
}

/// Wire shapes of the consensus subsystem.
///
/// Each consensus-parameter sub-message is independently optional, exactly
/// as the subsystem emits them.
pub mod raw {
    use codec::{Decode, Encode};

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawValidator {
        pub address: Vec<u8>,
        pub pub_key: Vec<u8>,
        pub voting_power: i64,
        pub proposer_priority: i64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawValidatorSet {
        pub validators: Vec<RawValidator>,
        pub proposer: Option<RawValidator>,
        pub total_voting_power: i64,
    }

    impl RawValidatorSet {
        pub fn proposer(&self) -> Option<&RawValidator> {
            self.proposer.as_ref()
        }
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawPartSetHeader {
        pub total: u32,
        pub hash: Vec<u8>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawBlockId {
        pub hash: Vec<u8>,
        pub part_set_header: RawPartSetHeader,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawBlockParams {
        pub max_bytes: i64,
        pub max_gas: i64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawEvidenceParams {
        pub max_age_num_blocks: i64,
        /// Nanoseconds.
        pub max_age_duration: i64,
        pub max_bytes: i64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawValidatorParams {
        pub pub_key_types: Vec<String>,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawVersionParams {
        pub app: u64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawAbciParams {
        pub vote_extensions_enable_height: i64,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
    pub struct RawConsensusParams {
        pub block: Option<RawBlockParams>,
        pub evidence: Option<RawEvidenceParams>,
        pub validator: Option<RawValidatorParams>,
        pub version: Option<RawVersionParams>,
        pub abci: Option<RawAbciParams>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(power: i64) -> Validator {
        Validator {
            voting_power: power,
            ..Validator::default()
        }
    }

    #[test]
    fn total_voting_power_saturates() {
        let set = ValidatorSet {
            validators: vec![validator(i64::MAX), validator(5)],
            proposer: None,
        };
        assert_eq!(set.total_voting_power(), i64::MAX);

        let set = ValidatorSet {
            validators: vec![validator(3), validator(4)],
            proposer: None,
        };
        assert_eq!(set.total_voting_power(), 7);
    }

    #[test]
    fn default_block_id_is_zero() {
        assert!(BlockId::default().is_zero());

        let id = BlockId {
            hash: Hash::from([1u8; 32]),
            ..BlockId::default()
        };
        assert!(!id.is_zero());
    }
}
