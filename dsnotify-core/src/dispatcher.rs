//! The notification dispatcher.
//!
//! Receives chain-progress notifications from the validation pipeline and
//! forwards them, synchronously and in a fixed order, to the subsystems that
//! maintain derived masternode and quorum state.
//!
//! # Tip updates
//!
//! `updated_block_tip` is the only gated path:
//!
//! 1. A pure disconnect (`new_tip == fork_point`) notifies nobody.
//! 2. The masternode list manager and the sync state machine always run.
//! 3. The activation flags are always recomputed.
//! 4. During initial block download, or in lite mode, dispatch stops here.
//! 5. Chain locks, privatesend, privatesend client, instantsend, governance,
//!    quorum manager and DKG session manager run, in that order.
//!
//! The first failing hook aborts the rest of the sequence and its error is
//! returned unchanged.

use crate::chain::{AUTOLOCK_DEPLOYMENT, ChainState, Connman, DeploymentStates};
use crate::error::HookResult;
use crate::flags::ActivationFlags;
use crate::subsystems::{
    ChainLocksHandler, DeterministicMnManager, DkgSessionManager, Governance, InstantSend,
    MasternodeSync, PrivateSend, PrivateSendClient, QuorumInstantSend, QuorumManager,
};
use dsnotify_sdk::config::ConsensusParams;
use dsnotify_sdk::objects::{BlockIndex, ChainEvent, DeterministicMnList, Transaction, TxPosition};
use std::sync::Arc;
use tracing::{debug, info};

/// Dispatch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatcherConfig {
    /// Skip the optional subsystems on tip updates.
    pub lite_mode: bool,
    pub consensus: ConsensusParams,
}

/// Handles to every subsystem the dispatcher notifies.
#[derive(Clone)]
pub struct Collaborators {
    pub masternode_sync: Arc<dyn MasternodeSync>,
    pub mn_list_manager: Arc<dyn DeterministicMnManager>,
    pub chain_locks: Arc<dyn ChainLocksHandler>,
    pub private_send: Arc<dyn PrivateSend>,
    /// Absent on nodes built or configured without a wallet.
    pub private_send_client: Option<Arc<dyn PrivateSendClient>>,
    pub instant_send: Arc<dyn InstantSend>,
    pub governance: Arc<dyn Governance>,
    pub quorum_manager: Arc<dyn QuorumManager>,
    pub dkg_session_manager: Arc<dyn DkgSessionManager>,
    pub quorum_instant_send: Arc<dyn QuorumInstantSend>,
}

pub struct NotificationDispatcher {
    config: DispatcherConfig,
    collaborators: Collaborators,
    chain: Arc<dyn ChainState>,
    deployments: Arc<dyn DeploymentStates>,
    connman: Arc<dyn Connman>,
    flags: Arc<ActivationFlags>,
}

impl NotificationDispatcher {
    pub fn new(
        config: DispatcherConfig,
        collaborators: Collaborators,
        chain: Arc<dyn ChainState>,
        deployments: Arc<dyn DeploymentStates>,
        connman: Arc<dyn Connman>,
    ) -> Self {
        Self {
            config,
            collaborators,
            chain,
            deployments,
            connman,
            flags: Arc::new(ActivationFlags::new()),
        }
    }

    /// Publish activation flags through an existing shared object instead of
    /// a private one.
    pub fn with_flags(mut self, flags: Arc<ActivationFlags>) -> Self {
        self.flags = flags;
        self
    }

    /// Activation flags as of the last connected tip.
    pub fn flags(&self) -> &Arc<ActivationFlags> {
        &self.flags
    }

    /// Replay the current active tip to every subsystem, as if it had just
    /// been connected. Called once at startup.
    ///
    /// With no active tip there is nothing to describe and nobody is notified.
    pub fn initialize_current_block_tip(&self) -> HookResult {
        let initial_download = self.chain.is_initial_block_download();
        match self.chain.active_tip() {
            Some(tip) => self.updated_block_tip(&tip, None, initial_download),
            None => {
                debug!("No active tip yet, skipping initial tip notification");
                Ok(())
            }
        }
    }

    pub fn accepted_block_header(&self, header: &BlockIndex) -> HookResult {
        debug!(height = header.height, hash = %header.hash, "Accepted block header");
        // Sync progress estimation reads chain-lock state, so chain locks go first.
        self.collaborators.chain_locks.on_accepted_header(header)?;
        self.collaborators.masternode_sync.on_accepted_header(header)
    }

    pub fn notify_header_tip(&self, header: &BlockIndex, initial_download: bool) -> HookResult {
        debug!(
            height = header.height,
            hash = %header.hash,
            initial_download,
            "Header tip changed"
        );
        self.collaborators
            .masternode_sync
            .on_header_tip(header, initial_download, self.connman.as_ref())
    }

    pub fn updated_block_tip(
        &self,
        new_tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        initial_download: bool,
    ) -> HookResult {
        if fork_point == Some(new_tip) {
            debug!(
                height = new_tip.height,
                hash = %new_tip.hash,
                "Blocks disconnected without a new tip, nothing to dispatch"
            );
            return Ok(());
        }

        debug!(
            height = new_tip.height,
            hash = %new_tip.hash,
            fork_height = fork_point.map(|f| f.height),
            initial_download,
            "Updated block tip"
        );

        let c = &self.collaborators;
        let connman = self.connman.as_ref();

        c.mn_list_manager.on_updated_tip(new_tip)?;
        c.masternode_sync
            .on_updated_tip(new_tip, initial_download, connman)?;

        self.update_activation_flags(new_tip);

        if initial_download {
            debug!(
                height = new_tip.height,
                "Initial block download, skipping optional subsystems"
            );
            return Ok(());
        }
        if self.config.lite_mode {
            debug!(height = new_tip.height, "Lite mode, skipping optional subsystems");
            return Ok(());
        }

        c.chain_locks.on_updated_tip(new_tip, fork_point)?;
        c.private_send.on_updated_tip(new_tip)?;
        if let Some(client) = &c.private_send_client {
            client.on_updated_tip(new_tip)?;
        }
        c.instant_send.on_updated_tip(new_tip)?;
        c.governance.on_updated_tip(new_tip, connman)?;
        c.quorum_manager
            .on_updated_tip(new_tip, fork_point, initial_download)?;
        c.dkg_session_manager
            .on_updated_tip(new_tip, fork_point, initial_download)
    }

    pub fn sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        debug!(
            txid = %tx.txid,
            block_height = block.map(|b| b.height),
            position = ?position,
            "Sync transaction"
        );
        let c = &self.collaborators;
        c.quorum_instant_send.on_sync_transaction(tx, block, position)?;
        c.instant_send.on_sync_transaction(tx, block, position)?;
        c.private_send.on_sync_transaction(tx, block, position)
    }

    pub fn notify_masternode_list_changed(&self, new_list: &DeterministicMnList) -> HookResult {
        debug!(
            height = new_list.height,
            masternodes = new_list.masternodes.len(),
            valid = new_list.valid_count(),
            "Masternode list changed"
        );
        let governance = &self.collaborators.governance;
        let connman = self.connman.as_ref();
        // Votes may reference objects resolved by the first pass.
        governance.reconcile_orphan_objects(connman)?;
        governance.reconcile_orphan_votes(connman)?;
        governance.cleanup_caches()
    }

    pub fn notify_chain_lock(&self, block: &BlockIndex) -> HookResult {
        debug!(height = block.height, hash = %block.hash, "Chain lock formed");
        self.collaborators
            .quorum_instant_send
            .on_chain_lock_formed(block)
    }

    /// Route an owned event to the matching notification.
    pub fn dispatch(&self, event: &ChainEvent) -> HookResult {
        match event {
            ChainEvent::AcceptedBlockHeader { header } => self.accepted_block_header(header),
            ChainEvent::HeaderTip {
                header,
                initial_download,
            } => self.notify_header_tip(header, *initial_download),
            ChainEvent::UpdatedBlockTip {
                new_tip,
                fork_point,
                initial_download,
            } => self.updated_block_tip(new_tip, fork_point.as_ref(), *initial_download),
            ChainEvent::Transaction {
                tx,
                block,
                position,
            } => self.sync_transaction(tx, block.as_ref(), *position),
            ChainEvent::MasternodeListChanged { list } => {
                self.notify_masternode_list_changed(list)
            }
            ChainEvent::ChainLock { block } => self.notify_chain_lock(block),
        }
    }

    fn update_activation_flags(&self, tip: &BlockIndex) {
        let dip0001 = self.config.consensus.dip0001_active_at(tip.height);
        if self.flags.set_dip0001_active_at_tip(dip0001) != dip0001 {
            info!(height = tip.height, active = dip0001, "DIP0001 activation at tip changed");
        }

        let autolock = self
            .deployments
            .threshold_state(tip, AUTOLOCK_DEPLOYMENT)
            .is_active();
        if self.flags.set_autolock_active(autolock) != autolock {
            info!(
                height = tip.height,
                deployment = %AUTOLOCK_DEPLOYMENT,
                active = autolock,
                "InstantSend autolock activation changed"
            );
        }
    }
}
