//! Domain model shared by the chainwire crates.
//!
//! Block, header, commit and state values live here together with the
//! shapes owned by the external consensus subsystem (validator sets, block
//! ids, raw consensus parameters). Nothing in this crate knows about the
//! wire format; see `chainwire-codec` for that.

pub mod block;
pub mod consensus;
pub mod hash;
pub mod params;
pub mod state;

pub use block::{
    BaseHeader, Block, Commit, Data, Header, IntermediateStateRoots, Signature, SignedHeader, Tx,
    Txs, Version,
};
pub use consensus::{
    BlockId, ConsensusVersion, PartSetHeader, PubKey, StateVersion, Timestamp, Validator,
    ValidatorSet,
};
pub use hash::{Hash, HASH_LEN};
pub use params::{AbciParams, BlockParams, ConsensusParams, ValidatorParams, VersionParams};
pub use state::State;

/// Canonical 32-byte address derived from a public key.
pub type Address = [u8; 32];
