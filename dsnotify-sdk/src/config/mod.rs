//! Consensus parameters shared by the dispatcher and the node binary.
//!
//! Only the parameters that influence dispatch live here; everything else a
//! network defines belongs to the validation pipeline.

mod consensus;

pub use consensus::{ConsensusParams, Network};
