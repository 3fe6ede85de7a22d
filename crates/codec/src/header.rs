use chainwire_types::{BaseHeader, Header, Version};

use crate::hash::{hash_from_wire, hash_to_wire};
use crate::wire;

pub fn header_to_wire(h: &Header) -> wire::Header {
    wire::Header {
        version: wire::Version {
            block: h.version.block,
            app: h.version.app,
        },
        chain_id: h.base_header.chain_id.clone(),
        height: h.base_header.height,
        time: h.base_header.time,
        last_header_hash: hash_to_wire(&h.last_header_hash),
        last_commit_hash: hash_to_wire(&h.last_commit_hash),
        data_hash: hash_to_wire(&h.data_hash),
        consensus_hash: hash_to_wire(&h.consensus_hash),
        app_hash: hash_to_wire(&h.app_hash),
        last_results_hash: hash_to_wire(&h.last_results_hash),
        proposer_address: h.proposer_address.clone(),
    }
}

/// Total over well-formed records.
///
/// An empty proposer address stays an unallocated `Vec`, matching what a
/// default header holds.
pub fn header_from_wire(w: wire::Header) -> Header {
    let proposer_address = if w.proposer_address.is_empty() {
        Vec::new()
    } else {
        w.proposer_address
    };

    Header {
        version: Version {
            block: w.version.block,
            app: w.version.app,
        },
        base_header: BaseHeader {
            height: w.height,
            time: w.time,
            chain_id: w.chain_id,
        },
        last_header_hash: hash_from_wire(w.last_header_hash),
        last_commit_hash: hash_from_wire(w.last_commit_hash),
        data_hash: hash_from_wire(w.data_hash),
        consensus_hash: hash_from_wire(w.consensus_hash),
        app_hash: hash_from_wire(w.app_hash),
        last_results_hash: hash_from_wire(w.last_results_hash),
        proposer_address,
    }
}
