//! Long-living masternode quorum subsystems.

use crate::error::HookResult;
use dsnotify_sdk::objects::{BlockIndex, Transaction, TxPosition};

pub trait ChainLocksHandler: Send + Sync {
    fn on_accepted_header(&self, header: &BlockIndex) -> HookResult;

    fn on_updated_tip(&self, tip: &BlockIndex, fork_point: Option<&BlockIndex>) -> HookResult;
}

pub trait QuorumManager: Send + Sync {
    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        initial_download: bool,
    ) -> HookResult;
}

pub trait DkgSessionManager: Send + Sync {
    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        initial_download: bool,
    ) -> HookResult;
}

/// Quorum-signed instant-send lock manager.
pub trait QuorumInstantSend: Send + Sync {
    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult;

    fn on_chain_lock_formed(&self, block: &BlockIndex) -> HookResult;
}
