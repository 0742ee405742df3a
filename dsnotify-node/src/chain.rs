//! In-memory stand-ins for the validation pipeline's chain state.

use dsnotify_core::{ChainState, Connman, DeploymentStates};
use dsnotify_sdk::objects::{BlockIndex, ChainEvent, Deployment, ThresholdState};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Active chain as reconstructed from the replayed events.
pub struct ReplayChain {
    tip: RwLock<Option<BlockIndex>>,
    initial_block_download_below: Option<u32>,
}

impl ReplayChain {
    pub fn new(initial_block_download_below: Option<u32>) -> Self {
        Self {
            tip: RwLock::new(None),
            initial_block_download_below,
        }
    }

    /// Track the active tip the way the pipeline would before announcing
    /// `event`.
    pub fn observe(&self, event: &ChainEvent) {
        if let ChainEvent::UpdatedBlockTip { new_tip, .. } = event {
            let mut tip = self.tip.write().unwrap_or_else(PoisonError::into_inner);
            *tip = Some(new_tip.clone());
        }
    }

    /// Flag tip announcements as initial block download while the observed
    /// tip is still below the configured height. A flag already set in the
    /// log is never cleared.
    pub fn mark_initial_download(&self, mut event: ChainEvent) -> ChainEvent {
        if self.is_initial_block_download() {
            match &mut event {
                ChainEvent::UpdatedBlockTip {
                    initial_download, ..
                }
                | ChainEvent::HeaderTip {
                    initial_download, ..
                } => *initial_download = true,
                _ => {}
            }
        }
        event
    }
}

impl ChainState for ReplayChain {
    fn active_tip(&self) -> Option<BlockIndex> {
        self.tip
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn is_initial_block_download(&self) -> bool {
        let Some(below) = self.initial_block_download_below else {
            return false;
        };
        self.active_tip().is_none_or(|tip| tip.height < below)
    }
}

/// Deployment states derived from fixed activation heights.
pub struct DeploymentTable {
    activation_heights: HashMap<Deployment, u32>,
}

impl DeploymentTable {
    pub fn new(activation_heights: HashMap<Deployment, u32>) -> Self {
        Self { activation_heights }
    }
}

impl DeploymentStates for DeploymentTable {
    fn threshold_state(&self, tip: &BlockIndex, deployment: Deployment) -> ThresholdState {
        match self.activation_heights.get(&deployment) {
            Some(&height) if tip.height.saturating_add(1) >= height => ThresholdState::Active,
            _ => ThresholdState::Defined,
        }
    }
}

/// Connection manager for a node with no peers.
pub struct OfflineConnman;

impl Connman for OfflineConnman {
    fn peer_count(&self) -> usize {
        0
    }
}
