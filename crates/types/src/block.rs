use crate::consensus::ValidatorSet;
use crate::hash::Hash;

/// An opaque signature over a header.
pub type Signature = Vec<u8>;

/// An opaque transaction payload.
pub type Tx = Vec<u8>;

/// Ordered transaction list of a block.
pub type Txs = Vec<Tx>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Version {
    pub block: u64,
    pub app: u64,
}

/// Fields every header carries regardless of the block format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseHeader {
    pub height: u64,
    /// Block time in nanoseconds since the unix epoch.
    pub time: u64,
    pub chain_id: String,
}

/// Per-block metadata.
///
/// Every hash is independently optional; the zero-value [`Hash`] means the
/// commitment is not set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
    pub base_header: BaseHeader,

    pub last_header_hash: Hash,
    pub last_commit_hash: Hash,
    pub data_hash: Hash,
    pub consensus_hash: Hash,
    pub app_hash: Hash,
    pub last_results_hash: Hash,

    /// Address of the block proposer. Empty when unknown.
    pub proposer_address: Vec<u8>,
}

impl Header {
    pub fn height(&self) -> u64 {
        self.base_header.height
    }

    pub fn time(&self) -> u64 {
        self.base_header.time
    }

    pub fn chain_id(&self) -> &str {
        &self.base_header.chain_id
    }
}

/// Signatures attesting to a header.
///
/// `None` and `Some(vec![])` are different values in memory. Only `None` is
/// canonical for "no signatures": both encode to the same bytes and decode
/// back to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Commit {
    pub signatures: Option<Vec<Signature>>,
}

impl Commit {
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self {
            signatures: Some(signatures),
        }
    }

    pub fn len(&self) -> usize {
        self.signatures.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignedHeader {
    pub header: Header,
    pub commit: Commit,
    /// Validator set that produced the header, when known.
    pub validators: Option<ValidatorSet>,
}

/// Intermediate state roots recorded while executing a block's transactions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntermediateStateRoots {
    pub raw_roots_list: Vec<Vec<u8>>,
}

/// Block payload.
///
/// `txs` follows the same absent-vs-empty convention as [`Commit`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Data {
    pub txs: Option<Txs>,
    pub intermediate_state_roots: IntermediateStateRoots,
}

impl Data {
    pub fn tx_count(&self) -> usize {
        self.txs.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub signed_header: SignedHeader,
    pub data: Data,
}

impl Block {
    pub fn height(&self) -> u64 {
        self.signed_header.header.height()
    }
}
