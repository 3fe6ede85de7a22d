use chainwire_types::Block;

use crate::data::{data_from_wire, data_to_wire};
use crate::error::ValidatorSetError;
use crate::external::ValidatorSetAdapter;
use crate::signed_header::{signed_header_from_wire, signed_header_to_wire};
use crate::wire;

pub fn block_to_wire<A>(b: &Block, adapter: &A) -> Result<wire::Block, ValidatorSetError>
where
    A: ValidatorSetAdapter + ?Sized,
{
    Ok(wire::Block {
        signed_header: signed_header_to_wire(&b.signed_header, adapter)?,
        data: data_to_wire(&b.data),
    })
}

pub fn block_from_wire<A>(w: wire::Block, adapter: &A) -> Result<Block, ValidatorSetError>
where
    A: ValidatorSetAdapter + ?Sized,
{
    Ok(Block {
        signed_header: signed_header_from_wire(w.signed_header, adapter)?,
        data: data_from_wire(w.data),
    })
}
