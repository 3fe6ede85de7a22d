use chainwire_types::State;
use tracing::debug;

use crate::error::BlockIdError;
use crate::external::BlockIdAdapter;
use crate::hash::{hash_from_wire, hash_to_wire};
use crate::wire;

/// Scalars are copied; the block id goes through the adapter and the raw
/// consensus params are carried over untouched.
pub fn state_to_wire<A>(s: &State, adapter: &A) -> wire::State
where
    A: BlockIdAdapter + ?Sized,
{
    wire::State {
        version: s.version.clone(),
        chain_id: s.chain_id.clone(),
        initial_height: s.initial_height,
        last_block_height: s.last_block_height,
        last_block_id: adapter.block_id_to_wire(&s.last_block_id),
        last_block_time: s.last_block_time,
        da_height: s.da_height,
        consensus_params: s.consensus_params.clone(),
        last_height_consensus_params_changed: s.last_height_consensus_params_changed,
        last_results_hash: hash_to_wire(&s.last_results_hash),
        app_hash: hash_to_wire(&s.app_hash),
    }
}

pub fn state_from_wire<A>(w: wire::State, adapter: &A) -> Result<State, BlockIdError>
where
    A: BlockIdAdapter + ?Sized,
{
    let last_block_id = adapter.block_id_from_wire(&w.last_block_id).map_err(|e| {
        debug!(target: "codec", error = %e, "consensus rejected last block id");
        e
    })?;

    Ok(State {
        version: w.version,
        chain_id: w.chain_id,
        initial_height: w.initial_height,
        last_block_height: w.last_block_height,
        last_block_id,
        last_block_time: w.last_block_time,
        da_height: w.da_height,
        consensus_params: w.consensus_params,
        last_height_consensus_params_changed: w.last_height_consensus_params_changed,
        last_results_hash: hash_from_wire(w.last_results_hash),
        app_hash: hash_from_wire(w.app_hash),
    })
}
