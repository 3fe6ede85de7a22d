//! Absent-vs-empty preserving conversion of opaque byte payload lists.
//!
//! The wire list has no absent state, so an absent sequence goes out as an
//! empty list and an empty list comes back as absent. Equality after a round
//! trip relies on this mapping.

use chainwire_types::{Signature, Txs};

/// Absent stays absent on the wire; present sequences keep order and length.
pub fn seq_to_wire<T: AsRef<[u8]>>(seq: Option<&[T]>) -> Vec<Vec<u8>> {
    match seq {
        None => Vec::new(),
        Some(items) => items.iter().map(|item| item.as_ref().to_vec()).collect(),
    }
}

/// A zero-length wire list decodes to `None`. Payloads are moved, not copied.
pub fn seq_from_wire(list: Vec<Vec<u8>>) -> Option<Vec<Vec<u8>>> {
    if list.is_empty() {
        return None;
    }
    Some(list)
}

pub fn txs_to_wire(txs: Option<&Txs>) -> Vec<Vec<u8>> {
    seq_to_wire(txs.map(Vec::as_slice))
}

pub fn txs_from_wire(list: Vec<Vec<u8>>) -> Option<Txs> {
    seq_from_wire(list)
}

pub fn signatures_to_wire(sigs: Option<&Vec<Signature>>) -> Vec<Vec<u8>> {
    seq_to_wire(sigs.map(Vec::as_slice))
}

pub fn signatures_from_wire(list: Vec<Vec<u8>>) -> Option<Vec<Signature>> {
    seq_from_wire(list)
}
