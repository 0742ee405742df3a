//! Interfaces onto state owned by the validation pipeline and the network
//! layer.

use dsnotify_sdk::objects::{BlockIndex, Deployment, ThresholdState};

/// Deployment whose threshold state drives the instant-send auto-lock flag.
///
/// Auto-locking has no deployment of its own and reuses DIP0003's.
pub const AUTOLOCK_DEPLOYMENT: Deployment = Deployment::Dip0003;

/// Read access to the active chain.
pub trait ChainState: Send + Sync {
    /// The block at the head of the active chain, if any block is connected.
    fn active_tip(&self) -> Option<BlockIndex>;

    /// Whether the node is still in initial block download.
    fn is_initial_block_download(&self) -> bool;
}

/// Version-bits deployment state query.
pub trait DeploymentStates: Send + Sync {
    /// Threshold state of `deployment` for the block after `tip`.
    fn threshold_state(&self, tip: &BlockIndex, deployment: Deployment) -> ThresholdState;
}

/// Connection manager handle passed through to subsystems that talk to peers.
pub trait Connman: Send + Sync {
    fn peer_count(&self) -> usize;
}
