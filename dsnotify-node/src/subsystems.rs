//! Subsystems that log every notification they receive.
//!
//! The replay node has no masternode, governance or quorum state of its own;
//! these stand in for them so the dispatch sequence can be observed.

use dsnotify_core::subsystems::{
    ChainLocksHandler, DeterministicMnManager, DkgSessionManager, Governance, InstantSend,
    MasternodeSync, PrivateSend, PrivateSendClient, QuorumInstantSend, QuorumManager,
};
use dsnotify_core::{Collaborators, Connman, HookResult, Subsystem};
use dsnotify_sdk::objects::{BlockIndex, Transaction, TxPosition};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct TracingSubsystems {
    notifications: AtomicU64,
}

impl TracingSubsystems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total hook invocations so far.
    pub fn notifications(&self) -> u64 {
        self.notifications.load(Ordering::Relaxed)
    }

    /// Wire this instance in as every collaborator.
    pub fn collaborators(self: &Arc<Self>, wallet: bool) -> Collaborators {
        Collaborators {
            masternode_sync: self.clone(),
            mn_list_manager: self.clone(),
            chain_locks: self.clone(),
            private_send: self.clone(),
            private_send_client: if wallet {
                Some(self.clone() as Arc<dyn PrivateSendClient>)
            } else {
                None
            },
            instant_send: self.clone(),
            governance: self.clone(),
            quorum_manager: self.clone(),
            dkg_session_manager: self.clone(),
            quorum_instant_send: self.clone(),
        }
    }

    fn tip(
        &self,
        subsystem: Subsystem,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
    ) -> HookResult {
        self.notifications.fetch_add(1, Ordering::Relaxed);
        info!(
            %subsystem,
            height = tip.height,
            hash = %tip.hash,
            fork_height = fork_point.map(|f| f.height),
            "Updated tip"
        );
        Ok(())
    }

    fn header(&self, subsystem: Subsystem, header: &BlockIndex, hook: &'static str) -> HookResult {
        self.notifications.fetch_add(1, Ordering::Relaxed);
        debug!(%subsystem, height = header.height, hash = %header.hash, hook);
        Ok(())
    }

    fn transaction(
        &self,
        subsystem: Subsystem,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.notifications.fetch_add(1, Ordering::Relaxed);
        debug!(
            %subsystem,
            txid = %tx.txid,
            value = tx.total_output_value(),
            coinbase = tx.is_coinbase(),
            block_height = block.map(|b| b.height),
            position = ?position,
            "Sync transaction"
        );
        Ok(())
    }

    fn maintenance(&self, step: &'static str) -> HookResult {
        self.notifications.fetch_add(1, Ordering::Relaxed);
        info!(subsystem = %Subsystem::Governance, step, "Governance maintenance");
        Ok(())
    }
}

impl MasternodeSync for TracingSubsystems {
    fn on_accepted_header(&self, header: &BlockIndex) -> HookResult {
        self.header(Subsystem::MasternodeSync, header, "accepted header")
    }

    fn on_header_tip(
        &self,
        header: &BlockIndex,
        initial_download: bool,
        connman: &dyn Connman,
    ) -> HookResult {
        debug!(initial_download, peers = connman.peer_count(), "Header tip");
        self.header(Subsystem::MasternodeSync, header, "header tip")
    }

    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        initial_download: bool,
        connman: &dyn Connman,
    ) -> HookResult {
        debug!(initial_download, peers = connman.peer_count(), "Sync tip");
        self.tip(Subsystem::MasternodeSync, tip, None)
    }
}

impl DeterministicMnManager for TracingSubsystems {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.tip(Subsystem::DeterministicMnManager, tip, None)
    }
}

impl ChainLocksHandler for TracingSubsystems {
    fn on_accepted_header(&self, header: &BlockIndex) -> HookResult {
        self.header(Subsystem::ChainLocks, header, "accepted header")
    }

    fn on_updated_tip(&self, tip: &BlockIndex, fork_point: Option<&BlockIndex>) -> HookResult {
        self.tip(Subsystem::ChainLocks, tip, fork_point)
    }
}

impl PrivateSend for TracingSubsystems {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.tip(Subsystem::PrivateSend, tip, None)
    }

    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.transaction(Subsystem::PrivateSend, tx, block, position)
    }
}

impl PrivateSendClient for TracingSubsystems {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.tip(Subsystem::PrivateSendClient, tip, None)
    }
}

impl InstantSend for TracingSubsystems {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.tip(Subsystem::InstantSend, tip, None)
    }

    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.transaction(Subsystem::InstantSend, tx, block, position)
    }
}

impl Governance for TracingSubsystems {
    fn on_updated_tip(&self, tip: &BlockIndex, _connman: &dyn Connman) -> HookResult {
        self.tip(Subsystem::Governance, tip, None)
    }

    fn reconcile_orphan_objects(&self, _connman: &dyn Connman) -> HookResult {
        self.maintenance("orphan objects")
    }

    fn reconcile_orphan_votes(&self, _connman: &dyn Connman) -> HookResult {
        self.maintenance("orphan votes")
    }

    fn cleanup_caches(&self) -> HookResult {
        self.maintenance("cache cleanup")
    }
}

impl QuorumManager for TracingSubsystems {
    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        _initial_download: bool,
    ) -> HookResult {
        self.tip(Subsystem::QuorumManager, tip, fork_point)
    }
}

impl DkgSessionManager for TracingSubsystems {
    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        _initial_download: bool,
    ) -> HookResult {
        self.tip(Subsystem::DkgSessionManager, tip, fork_point)
    }
}

impl QuorumInstantSend for TracingSubsystems {
    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.transaction(Subsystem::QuorumInstantSend, tx, block, position)
    }

    fn on_chain_lock_formed(&self, block: &BlockIndex) -> HookResult {
        self.notifications.fetch_add(1, Ordering::Relaxed);
        info!(
            subsystem = %Subsystem::QuorumInstantSend,
            height = block.height,
            hash = %block.hash,
            "Chain lock formed"
        );
        Ok(())
    }
}
