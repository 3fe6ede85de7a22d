use crate::consensus::raw::RawConsensusParams;
use crate::consensus::{BlockId, StateVersion, Timestamp};
use crate::hash::Hash;

/// Running summary of the chain, used to validate the next block.
///
/// `last_block_id` and `consensus_params` belong to the consensus subsystem;
/// the params are kept in the subsystem's own representation and only
/// translated on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub version: StateVersion,

    pub chain_id: String,
    pub initial_height: u64,

    pub last_block_height: u64,
    pub last_block_id: BlockId,
    pub last_block_time: Timestamp,

    /// Height of the data availability layer the chain has synced to.
    pub da_height: u64,

    pub consensus_params: RawConsensusParams,
    pub last_height_consensus_params_changed: u64,

    pub last_results_hash: Hash,
    pub app_hash: Hash,
}
