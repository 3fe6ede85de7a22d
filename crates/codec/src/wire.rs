//! Wire records.
//!
//! Field order is CONSENSUS-RELEVANT. Changing it breaks every stored block
//! and every peer; the golden vectors under `tests/vectors` pin it.

use codec::{Decode, Encode};

use chainwire_types::consensus::raw::{RawBlockId, RawConsensusParams, RawValidatorSet};
use chainwire_types::{StateVersion, Timestamp};

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Version {
    pub block: u64,
    pub app: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Header {
    pub version: Version,
    pub chain_id: String,
    pub height: u64,
    pub time: u64,
    pub last_header_hash: Vec<u8>,
    pub last_commit_hash: Vec<u8>,
    pub data_hash: Vec<u8>,
    pub consensus_hash: Vec<u8>,
    pub app_hash: Vec<u8>,
    pub last_results_hash: Vec<u8>,
    pub proposer_address: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Commit {
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct SignedHeader {
    pub header: Header,
    pub commit: Commit,
    pub validators: Option<RawValidatorSet>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Data {
    pub txs: Vec<Vec<u8>>,
    pub intermediate_state_roots: Vec<Vec<u8>>,
    /// Reserved for evidence. Always written empty and ignored on read.
    pub evidence: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct Block {
    pub signed_header: SignedHeader,
    pub data: Data,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode)]
pub struct State {
    pub version: StateVersion,
    pub chain_id: String,
    pub initial_height: u64,
    pub last_block_height: u64,
    pub last_block_id: RawBlockId,
    pub last_block_time: Timestamp,
    pub da_height: u64,
    pub consensus_params: RawConsensusParams,
    pub last_height_consensus_params_changed: u64,
    pub last_results_hash: Vec<u8>,
    pub app_hash: Vec<u8>,
}
