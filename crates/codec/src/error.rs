//! Error kinds surfaced by the codecs.
//!
//! Component errors convert into [`CodecError`] without losing their kind, so
//! a caller can always tell a malformed message from a rejected validator set
//! or block id.

use chainwire_crypto::CryptoError;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// The consensus subsystem refused to convert a validator set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidatorSetError {
    #[error("validator set is empty")]
    Empty,
    #[error("validator {index}: {source}")]
    InvalidKey {
        index: usize,
        #[source]
        source: CryptoError,
    },
    #[error("validator {index}: address does not match public key")]
    AddressMismatch { index: usize },
    #[error("validator {index}: negative voting power {power}")]
    NegativePower { index: usize, power: i64 },
    #[error("validator {index}: duplicate address")]
    Duplicate { index: usize },
    #[error("total voting power exceeds {max}")]
    TotalPowerTooLarge { max: i64 },
    #[error("invalid proposer: {0}")]
    Proposer(Box<ValidatorSetError>),
}

/// The consensus subsystem refused a block id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockIdError {
    #[error("block hash must be empty or 32 bytes, got {0}")]
    HashLength(usize),
    #[error("part set header hash must be empty or 32 bytes, got {0}")]
    PartSetHashLength(usize),
}

/// A required consensus-parameter sub-message was absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsensusParamsError {
    #[error("consensus params have no block section")]
    MissingBlock,
    #[error("consensus params have no validator section")]
    MissingValidator,
    #[error("consensus params have no version section")]
    MissingVersion,
}

#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed, truncated or over-long wire bytes.
    #[error("wire decode failed: {0}")]
    Decode(#[from] codec::Error),
    #[error(transparent)]
    ValidatorSet(#[from] ValidatorSetError),
    #[error(transparent)]
    BlockId(#[from] BlockIdError),
    #[error(transparent)]
    ConsensusParams(#[from] ConsensusParamsError),
    #[error("message of {len} bytes exceeds the {max} byte limit")]
    Oversized { len: usize, max: usize },
}

impl ErrorCode for CodecError {
    fn code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "CODEC_DECODE_FAILED",
            Self::ValidatorSet(_) => "CODEC_INVALID_VALIDATOR_SET",
            Self::BlockId(_) => "CODEC_INVALID_BLOCK_ID",
            Self::ConsensusParams(_) => "CODEC_INVALID_CONSENSUS_PARAMS",
            Self::Oversized { .. } => "CODEC_MESSAGE_TOO_LARGE",
        }
    }
}
