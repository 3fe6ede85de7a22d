use chainwire_types::Commit;

use crate::bytes::{signatures_from_wire, signatures_to_wire};
use crate::wire;

pub fn commit_to_wire(c: &Commit) -> wire::Commit {
    wire::Commit {
        signatures: signatures_to_wire(c.signatures.as_ref()),
    }
}

pub fn commit_from_wire(w: wire::Commit) -> Commit {
    Commit {
        signatures: signatures_from_wire(w.signatures),
    }
}
