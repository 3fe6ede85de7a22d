//! Capabilities borrowed from the consensus subsystem.
//!
//! The codecs never look inside a validator set or block id themselves; they
//! go through these traits. [`ConsensusAdapter`] applies the subsystem's
//! validity rules and is what the free functions use. Tests substitute their
//! own implementations.

use std::collections::HashSet;

use chainwire_crypto::validator_identity;
use chainwire_types::consensus::raw::{
    RawBlockId, RawPartSetHeader, RawValidator, RawValidatorSet,
};
use chainwire_types::{BlockId, PartSetHeader, Validator, ValidatorSet, HASH_LEN};
use tracing::debug;

use crate::error::{BlockIdError, ValidatorSetError};
use crate::hash::{hash_from_wire, hash_to_wire};

/// Upper bound on the summed voting power of a validator set.
pub const MAX_TOTAL_VOTING_POWER: i64 = i64::MAX / 8;

pub trait ValidatorSetAdapter {
    fn validators_to_wire(&self, set: &ValidatorSet)
        -> Result<RawValidatorSet, ValidatorSetError>;

    fn validators_from_wire(&self, raw: &RawValidatorSet)
        -> Result<ValidatorSet, ValidatorSetError>;

    /// The designated proposer of a wire set, if any.
    fn proposer<'a>(&self, raw: &'a RawValidatorSet) -> Option<&'a RawValidator> {
        raw.proposer()
    }
}

pub trait BlockIdAdapter {
    fn block_id_to_wire(&self, id: &BlockId) -> RawBlockId;

    fn block_id_from_wire(&self, raw: &RawBlockId) -> Result<BlockId, BlockIdError>;
}

/// Default adapter enforcing the consensus subsystem's rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsensusAdapter;

fn validator_to_raw(v: &Validator) -> RawValidator {
    RawValidator {
        address: v.address.to_vec(),
        pub_key: v.pub_key.as_bytes().to_vec(),
        voting_power: v.voting_power,
        proposer_priority: v.proposer_priority,
    }
}

fn validator_from_raw(index: usize, raw: &RawValidator) -> Result<Validator, ValidatorSetError> {
    let (pub_key, address) = validator_identity(&raw.pub_key)
        .map_err(|source| ValidatorSetError::InvalidKey { index, source })?;
    if raw.address.as_slice() != address.as_slice() {
        return Err(ValidatorSetError::AddressMismatch { index });
    }
    if raw.voting_power < 0 {
        return Err(ValidatorSetError::NegativePower {
            index,
            power: raw.voting_power,
        });
    }

    Ok(Validator {
        address,
        pub_key,
        voting_power: raw.voting_power,
        proposer_priority: raw.proposer_priority,
    })
}

fn checked_total_power<'a>(
    validators: impl IntoIterator<Item = &'a Validator>,
) -> Result<i64, ValidatorSetError> {
    let mut total: i64 = 0;
    for v in validators {
        total = total
            .checked_add(v.voting_power)
            .filter(|t| *t <= MAX_TOTAL_VOTING_POWER)
            .ok_or(ValidatorSetError::TotalPowerTooLarge {
                max: MAX_TOTAL_VOTING_POWER,
            })?;
    }
    Ok(total)
}

impl ValidatorSetAdapter for ConsensusAdapter {
    fn validators_to_wire(
        &self,
        set: &ValidatorSet,
    ) -> Result<RawValidatorSet, ValidatorSetError> {
        if set.is_empty() {
            return Err(ValidatorSetError::Empty);
        }
        let total_voting_power = checked_total_power(&set.validators)?;

        Ok(RawValidatorSet {
            validators: set.validators.iter().map(validator_to_raw).collect(),
            proposer: set.proposer.as_ref().map(validator_to_raw),
            total_voting_power,
        })
    }

    fn validators_from_wire(
        &self,
        raw: &RawValidatorSet,
    ) -> Result<ValidatorSet, ValidatorSetError> {
        if raw.validators.is_empty() {
            return Err(ValidatorSetError::Empty);
        }

        let mut seen = HashSet::with_capacity(raw.validators.len());
        let mut validators = Vec::with_capacity(raw.validators.len());
        for (index, rv) in raw.validators.iter().enumerate() {
            let v = validator_from_raw(index, rv)?;
            if !seen.insert(v.address) {
                return Err(ValidatorSetError::Duplicate { index });
            }
            validators.push(v);
        }
        // The wire total is informational; recompute it.
        checked_total_power(&validators)?;

        let proposer = raw
            .proposer
            .as_ref()
            .map(|p| validator_from_raw(0, p))
            .transpose()
            .map_err(|e| ValidatorSetError::Proposer(Box::new(e)))?;

        Ok(ValidatorSet {
            validators,
            proposer,
        })
    }
}

fn check_hash_len(hash: &[u8]) -> bool {
    hash.is_empty() || hash.len() == HASH_LEN
}

impl BlockIdAdapter for ConsensusAdapter {
    fn block_id_to_wire(&self, id: &BlockId) -> RawBlockId {
        RawBlockId {
            hash: hash_to_wire(&id.hash),
            part_set_header: RawPartSetHeader {
                total: id.part_set_header.total,
                hash: hash_to_wire(&id.part_set_header.hash),
            },
        }
    }

    fn block_id_from_wire(&self, raw: &RawBlockId) -> Result<BlockId, BlockIdError> {
        if !check_hash_len(&raw.hash) {
            debug!(target: "codec", len = raw.hash.len(), "rejecting block id hash");
            return Err(BlockIdError::HashLength(raw.hash.len()));
        }
        let psh = &raw.part_set_header;
        if !check_hash_len(&psh.hash) {
            debug!(target: "codec", len = psh.hash.len(), "rejecting part set header hash");
            return Err(BlockIdError::PartSetHashLength(psh.hash.len()));
        }

        Ok(BlockId {
            hash: hash_from_wire(raw.hash.clone()),
            part_set_header: PartSetHeader {
                total: psh.total,
                hash: hash_from_wire(psh.hash.clone()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chainwire_crypto::CryptoError;
    use chainwire_types::Hash;
    use ed25519_dalek::SigningKey;

    fn validator(seed: u8, power: i64) -> Validator {
        let sk = SigningKey::from_bytes(&[seed; 32]);
        let (pub_key, address) = validator_identity(sk.verifying_key().as_bytes()).unwrap();
        Validator {
            address,
            pub_key,
            voting_power: power,
            proposer_priority: 0,
        }
    }

    fn set_of(validators: Vec<Validator>) -> ValidatorSet {
        let proposer = validators.first().cloned();
        ValidatorSet {
            validators,
            proposer,
        }
    }

    #[test]
    fn validator_set_roundtrip() {
        let set = set_of(vec![validator(1, 10), validator(2, 20)]);
        let raw = ConsensusAdapter.validators_to_wire(&set).unwrap();
        assert_eq!(raw.total_voting_power, 30);
        assert_eq!(ConsensusAdapter.validators_from_wire(&raw).unwrap(), set);
    }

    #[test]
    fn empty_set_is_rejected_both_ways() {
        let set = ValidatorSet::default();
        assert_eq!(
            ConsensusAdapter.validators_to_wire(&set).unwrap_err(),
            ValidatorSetError::Empty
        );
        assert_eq!(
            ConsensusAdapter
                .validators_from_wire(&RawValidatorSet::default())
                .unwrap_err(),
            ValidatorSetError::Empty
        );
    }

    #[test]
    fn duplicate_validators_are_rejected() {
        let set = set_of(vec![validator(1, 1), validator(1, 1)]);
        let raw = ConsensusAdapter.validators_to_wire(&set).unwrap();
        assert_eq!(
            ConsensusAdapter.validators_from_wire(&raw).unwrap_err(),
            ValidatorSetError::Duplicate { index: 1 }
        );
    }

    #[test]
    fn negative_power_is_rejected() {
        let set = set_of(vec![validator(1, 1), validator(2, -5)]);
        let raw = ConsensusAdapter.validators_to_wire(&set).unwrap();
        assert_eq!(
            ConsensusAdapter.validators_from_wire(&raw).unwrap_err(),
            ValidatorSetError::NegativePower {
                index: 1,
                power: -5
            }
        );
    }

    #[test]
    fn excessive_total_power_is_rejected() {
        let set = set_of(vec![
            validator(1, MAX_TOTAL_VOTING_POWER),
            validator(2, 1),
        ]);
        assert_eq!(
            ConsensusAdapter.validators_to_wire(&set).unwrap_err(),
            ValidatorSetError::TotalPowerTooLarge {
                max: MAX_TOTAL_VOTING_POWER
            }
        );
    }

    #[test]
    fn address_must_match_key() {
        let mut raw = ConsensusAdapter
            .validators_to_wire(&set_of(vec![validator(1, 1)]))
            .unwrap();
        raw.validators[0].address = vec![0u8; 32];
        assert_eq!(
            ConsensusAdapter.validators_from_wire(&raw).unwrap_err(),
            ValidatorSetError::AddressMismatch { index: 0 }
        );
    }

    #[test]
    fn bad_proposer_key_is_reported_as_proposer_error() {
        let mut raw = ConsensusAdapter
            .validators_to_wire(&set_of(vec![validator(1, 1)]))
            .unwrap();
        if let Some(p) = raw.proposer.as_mut() {
            p.pub_key = vec![1, 2, 3];
        }
        assert_eq!(
            ConsensusAdapter.validators_from_wire(&raw).unwrap_err(),
            ValidatorSetError::Proposer(Box::new(ValidatorSetError::InvalidKey {
                index: 0,
                source: CryptoError::InvalidKeyLength(3),
            }))
        );
    }

    #[test]
    fn block_id_roundtrip() {
        let id = BlockId {
            hash: Hash::from([3u8; 32]),
            part_set_header: PartSetHeader {
                total: 4,
                hash: Hash::from([5u8; 32]),
            },
        };
        let raw = ConsensusAdapter.block_id_to_wire(&id);
        assert_eq!(ConsensusAdapter.block_id_from_wire(&raw).unwrap(), id);

        let zero = BlockId::default();
        let raw = ConsensusAdapter.block_id_to_wire(&zero);
        assert_eq!(ConsensusAdapter.block_id_from_wire(&raw).unwrap(), zero);
    }

    #[test]
    fn block_id_hash_length_is_checked() {
        let raw = RawBlockId {
            hash: vec![1; 31],
            ..RawBlockId::default()
        };
        assert_eq!(
            ConsensusAdapter.block_id_from_wire(&raw).unwrap_err(),
            BlockIdError::HashLength(31)
        );

        let raw = RawBlockId {
            part_set_header: RawPartSetHeader {
                total: 1,
                hash: vec![1; 2],
            },
            ..RawBlockId::default()
        };
        assert_eq!(
            ConsensusAdapter.block_id_from_wire(&raw).unwrap_err(),
            BlockIdError::PartSetHashLength(2)
        );
    }
}
