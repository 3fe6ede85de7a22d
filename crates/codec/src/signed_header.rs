use chainwire_types::SignedHeader;

use crate::commit::{commit_from_wire, commit_to_wire};
use crate::error::ValidatorSetError;
use crate::external::ValidatorSetAdapter;
use crate::header::{header_from_wire, header_to_wire};
use crate::validators::{validator_set_from_wire, validator_set_to_wire};
use crate::wire;

pub fn signed_header_to_wire<A>(
    sh: &SignedHeader,
    adapter: &A,
) -> Result<wire::SignedHeader, ValidatorSetError>
where
    A: ValidatorSetAdapter + ?Sized,
{
    Ok(wire::SignedHeader {
        header: header_to_wire(&sh.header),
        commit: commit_to_wire(&sh.commit),
        validators: validator_set_to_wire(sh.validators.as_ref(), adapter)?,
    })
}

pub fn signed_header_from_wire<A>(
    w: wire::SignedHeader,
    adapter: &A,
) -> Result<SignedHeader, ValidatorSetError>
where
    A: ValidatorSetAdapter + ?Sized,
{
    let validators = validator_set_from_wire(w.validators.as_ref(), adapter)?;
    Ok(SignedHeader {
        header: header_from_wire(w.header),
        commit: commit_from_wire(w.commit),
        validators,
    })
}
