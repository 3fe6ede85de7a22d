use chainwire_types::{Data, IntermediateStateRoots};

use crate::bytes::{txs_from_wire, txs_to_wire};
use crate::wire;

pub fn data_to_wire(d: &Data) -> wire::Data {
    wire::Data {
        txs: txs_to_wire(d.txs.as_ref()),
        intermediate_state_roots: d.intermediate_state_roots.raw_roots_list.clone(),
        // TODO: encode evidence once blocks carry an evidence type.
        evidence: Vec::new(),
    }
}

/// Infallible. Whatever sits in the evidence field is not read.
pub fn data_from_wire(w: wire::Data) -> Data {
    Data {
        txs: txs_from_wire(w.txs),
        intermediate_state_roots: IntermediateStateRoots {
            raw_roots_list: w.intermediate_state_roots,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_roundtrip_keeps_absent_txs() {
        let d = Data {
            txs: None,
            intermediate_state_roots: IntermediateStateRoots {
                raw_roots_list: vec![vec![0x1]],
            },
        };
        let w = data_to_wire(&d);
        assert!(w.txs.is_empty());
        assert!(w.evidence.is_empty());
        assert_eq!(data_from_wire(w), d);
    }

    #[test]
    fn evidence_is_ignored_on_decode() {
        let w = wire::Data {
            txs: vec![b"tx".to_vec()],
            intermediate_state_roots: Vec::new(),
            evidence: vec![vec![9, 9]],
        };
        let d = data_from_wire(w);
        assert_eq!(d.txs, Some(vec![b"tx".to_vec()]));
        assert!(d.intermediate_state_roots.raw_roots_list.is_empty());
    }
}
