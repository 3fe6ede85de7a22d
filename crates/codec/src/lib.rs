//! Canonical binary codec for blocks, headers, commits and chain state.
//!
//! Domain values from `chainwire-types` are converted into the wire records
//! of [`wire`] and serialized with SCALE. Decoding is the exact inverse: a
//! value that went through `encode_*` comes back equal from `decode_*`,
//! including the absent-vs-empty distinction on transaction and signature
//! lists.
//!
//! Validator sets and block ids are owned by the consensus subsystem and are
//! converted through [`ValidatorSetAdapter`] and [`BlockIdAdapter`]. The free
//! functions use [`ConsensusAdapter`] with the default [`CodecConfig`]; build
//! a [`Codec`] to pick either yourself.

use codec::{Decode, DecodeAll, Encode};
use tracing::debug;

use chainwire_types::{Block, Commit, Data, Header, SignedHeader, State};

pub mod block;
pub mod bytes;
pub mod commit;
pub mod config;
pub mod data;
pub mod error;
pub mod external;
pub mod hash;
pub mod header;
pub mod params;
pub mod signed_header;
pub mod state;
pub mod validators;
pub mod wire;

pub use block::{block_from_wire, block_to_wire};
pub use bytes::{signatures_from_wire, signatures_to_wire, txs_from_wire, txs_to_wire};
pub use commit::{commit_from_wire, commit_to_wire};
pub use config::CodecConfig;
pub use data::{data_from_wire, data_to_wire};
pub use error::{BlockIdError, CodecError, ConsensusParamsError, ErrorCode, ValidatorSetError};
pub use external::{BlockIdAdapter, ConsensusAdapter, ValidatorSetAdapter};
pub use hash::{hash_from_wire, hash_to_wire};
pub use header::{header_from_wire, header_to_wire};
pub use params::{consensus_params_from_raw, consensus_params_to_raw};
pub use signed_header::{signed_header_from_wire, signed_header_to_wire};
pub use state::{state_from_wire, state_to_wire};
pub use validators::{validator_set_from_wire, validator_set_to_wire};

/// Decodes one wire record, rejecting oversized input and trailing bytes.
fn decode_canonical<T: Decode>(bytes: &[u8], config: &CodecConfig) -> Result<T, CodecError> {
    config.check_len(bytes.len())?;
    T::decode_all(&mut &*bytes).map_err(|e| {
        debug!(target: "codec", len = bytes.len(), error = %e, "canonical decode failed");
        CodecError::Decode(e)
    })
}

/// A codec bound to a consensus adapter and decode limits.
#[derive(Clone, Debug, Default)]
pub struct Codec<A = ConsensusAdapter> {
    adapter: A,
    config: CodecConfig,
}

impl<A> Codec<A> {
    pub fn new(adapter: A, config: CodecConfig) -> Self {
        Self { adapter, config }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode_header(&self, h: &Header) -> Vec<u8> {
        header_to_wire(h).encode()
    }

    pub fn decode_header(&self, bytes: &[u8]) -> Result<Header, CodecError> {
        decode_canonical(bytes, &self.config).map(header_from_wire)
    }

    pub fn encode_commit(&self, c: &Commit) -> Vec<u8> {
        commit_to_wire(c).encode()
    }

    pub fn decode_commit(&self, bytes: &[u8]) -> Result<Commit, CodecError> {
        decode_canonical(bytes, &self.config).map(commit_from_wire)
    }

    pub fn encode_data(&self, d: &Data) -> Vec<u8> {
        data_to_wire(d).encode()
    }

    pub fn decode_data(&self, bytes: &[u8]) -> Result<Data, CodecError> {
        decode_canonical(bytes, &self.config).map(data_from_wire)
    }
}

impl<A: ValidatorSetAdapter> Codec<A> {
    pub fn encode_signed_header(&self, sh: &SignedHeader) -> Result<Vec<u8>, CodecError> {
        Ok(signed_header_to_wire(sh, &self.adapter)?.encode())
    }

    pub fn decode_signed_header(&self, bytes: &[u8]) -> Result<SignedHeader, CodecError> {
        let w = decode_canonical(bytes, &self.config)?;
        Ok(signed_header_from_wire(w, &self.adapter)?)
    }

    pub fn encode_block(&self, b: &Block) -> Result<Vec<u8>, CodecError> {
        Ok(block_to_wire(b, &self.adapter)?.encode())
    }

    pub fn decode_block(&self, bytes: &[u8]) -> Result<Block, CodecError> {
        let w = decode_canonical(bytes, &self.config)?;
        Ok(block_from_wire(w, &self.adapter)?)
    }
}

impl<A: BlockIdAdapter> Codec<A> {
    pub fn encode_state(&self, s: &State) -> Vec<u8> {
        state_to_wire(s, &self.adapter).encode()
    }

    pub fn decode_state(&self, bytes: &[u8]) -> Result<State, CodecError> {
        let w = decode_canonical(bytes, &self.config)?;
        Ok(state_from_wire(w, &self.adapter)?)
    }
}

pub fn encode_header(h: &Header) -> Vec<u8> {
    Codec::<ConsensusAdapter>::default().encode_header(h)
}

pub fn decode_header(bytes: &[u8]) -> Result<Header, CodecError> {
    Codec::<ConsensusAdapter>::default().decode_header(bytes)
}

pub fn encode_commit(c: &Commit) -> Vec<u8> {
    Codec::<ConsensusAdapter>::default().encode_commit(c)
}

pub fn decode_commit(bytes: &[u8]) -> Result<Commit, CodecError> {
    Codec::<ConsensusAdapter>::default().decode_commit(bytes)
}

pub fn encode_data(d: &Data) -> Vec<u8> {
    Codec::<ConsensusAdapter>::default().encode_data(d)
}

pub fn decode_data(bytes: &[u8]) -> Result<Data, CodecError> {
    Codec::<ConsensusAdapter>::default().decode_data(bytes)
}

pub fn encode_signed_header(sh: &SignedHeader) -> Result<Vec<u8>, CodecError> {
    Codec::<ConsensusAdapter>::default().encode_signed_header(sh)
}

pub fn decode_signed_header(bytes: &[u8]) -> Result<SignedHeader, CodecError> {
    Codec::<ConsensusAdapter>::default().decode_signed_header(bytes)
}

/// Top-level entry point for block persistence and transmission.
pub fn encode_block(b: &Block) -> Result<Vec<u8>, CodecError> {
    Codec::<ConsensusAdapter>::default().encode_block(b)
}

pub fn decode_block(bytes: &[u8]) -> Result<Block, CodecError> {
    Codec::<ConsensusAdapter>::default().decode_block(bytes)
}

pub fn encode_state(s: &State) -> Vec<u8> {
    Codec::<ConsensusAdapter>::default().encode_state(s)
}

pub fn decode_state(bytes: &[u8]) -> Result<State, CodecError> {
    Codec::<ConsensusAdapter>::default().decode_state(bytes)
}
