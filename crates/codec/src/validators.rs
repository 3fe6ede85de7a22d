use chainwire_types::consensus::raw::RawValidatorSet;
use chainwire_types::ValidatorSet;
use tracing::{debug, trace};

use crate::error::ValidatorSetError;
use crate::external::ValidatorSetAdapter;

pub fn validator_set_to_wire<A>(
    set: Option<&ValidatorSet>,
    adapter: &A,
) -> Result<Option<RawValidatorSet>, ValidatorSetError>
where
    A: ValidatorSetAdapter + ?Sized,
{
    set.map(|s| adapter.validators_to_wire(s)).transpose()
}

/// Rebuilds a validator set only when the wire field is present AND names a
/// proposer. A proposer-less set is treated as absent even if it lists
/// validators. Errors from the adapter are returned unchanged.
pub fn validator_set_from_wire<A>(
    raw: Option<&RawValidatorSet>,
    adapter: &A,
) -> Result<Option<ValidatorSet>, ValidatorSetError>
where
    A: ValidatorSetAdapter + ?Sized,
{
    let Some(raw) = raw else {
        return Ok(None);
    };
    if adapter.proposer(raw).is_none() {
        trace!(
            target: "codec",
            validators = raw.validators.len(),
            "validator set has no proposer, leaving it absent"
        );
        return Ok(None);
    }

    adapter.validators_from_wire(raw).map(Some).map_err(|e| {
        debug!(target: "codec", error = %e, "consensus rejected validator set");
        e
    })
}
