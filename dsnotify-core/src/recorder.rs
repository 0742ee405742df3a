//! Call-recording collaborators for dispatcher tests.

use crate::chain::{ChainState, Connman, DeploymentStates};
use crate::dispatcher::{Collaborators, DispatcherConfig, NotificationDispatcher};
use crate::error::{HookResult, Subsystem, SubsystemError};
use crate::subsystems::{
    ChainLocksHandler, DeterministicMnManager, DkgSessionManager, Governance, InstantSend,
    MasternodeSync, PrivateSend, PrivateSendClient, QuorumInstantSend, QuorumManager,
};
use dsnotify_sdk::objects::{
    BlockHash, BlockIndex, Deployment, ThresholdState, Transaction, TxPosition, Txid,
};
use std::sync::{Arc, Mutex, PoisonError};

/// One observed hook invocation. Blocks are identified by height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SyncAcceptedHeader { header: u32 },
    SyncHeaderTip { header: u32, ibd: bool },
    SyncUpdatedTip { tip: u32, ibd: bool },
    MnListUpdatedTip { tip: u32 },
    ChainLocksAcceptedHeader { header: u32 },
    ChainLocksUpdatedTip { tip: u32, fork: Option<u32> },
    PrivateSendUpdatedTip { tip: u32 },
    PrivateSendClientUpdatedTip { tip: u32 },
    InstantSendUpdatedTip { tip: u32 },
    GovernanceUpdatedTip { tip: u32 },
    QuorumUpdatedTip { tip: u32, fork: Option<u32>, ibd: bool },
    DkgUpdatedTip { tip: u32, fork: Option<u32>, ibd: bool },
    QuorumInstantSendTx { txid: Txid, block: Option<u32>, position: TxPosition },
    InstantSendTx { txid: Txid, block: Option<u32>, position: TxPosition },
    PrivateSendTx { txid: Txid, block: Option<u32>, position: TxPosition },
    GovernanceOrphanObjects,
    GovernanceOrphanVotes,
    GovernanceCleanup,
    QuorumInstantSendChainLock { block: u32 },
}

impl Call {
    /// Whether this call belongs to the set skipped during IBD or lite mode.
    pub fn is_gated_tip_hook(&self) -> bool {
        matches!(
            self,
            Call::ChainLocksUpdatedTip { .. }
                | Call::PrivateSendUpdatedTip { .. }
                | Call::PrivateSendClientUpdatedTip { .. }
                | Call::InstantSendUpdatedTip { .. }
                | Call::GovernanceUpdatedTip { .. }
                | Call::QuorumUpdatedTip { .. }
                | Call::DkgUpdatedTip { .. }
        )
    }
}

type FailWhen = fn(&Call) -> bool;

/// Implements every collaborator trait and appends each call to a log.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
    fail_when: Option<FailWhen>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every call, and fail the ones matching `fail_when`.
    pub fn failing(fail_when: FailWhen) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_when: Some(fail_when),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn record(&self, subsystem: Subsystem, call: Call) -> HookResult {
        let fail = self.fail_when.is_some_and(|f| f(&call));
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
        if fail {
            Err(SubsystemError::new(subsystem, "injected failure"))
        } else {
            Ok(())
        }
    }
}

fn height(block: Option<&BlockIndex>) -> Option<u32> {
    block.map(|b| b.height)
}

impl MasternodeSync for Recorder {
    fn on_accepted_header(&self, header: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::MasternodeSync,
            Call::SyncAcceptedHeader {
                header: header.height,
            },
        )
    }

    fn on_header_tip(&self, header: &BlockIndex, ibd: bool, _connman: &dyn Connman) -> HookResult {
        self.record(
            Subsystem::MasternodeSync,
            Call::SyncHeaderTip {
                header: header.height,
                ibd,
            },
        )
    }

    fn on_updated_tip(&self, tip: &BlockIndex, ibd: bool, _connman: &dyn Connman) -> HookResult {
        self.record(
            Subsystem::MasternodeSync,
            Call::SyncUpdatedTip {
                tip: tip.height,
                ibd,
            },
        )
    }
}

impl DeterministicMnManager for Recorder {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::DeterministicMnManager,
            Call::MnListUpdatedTip { tip: tip.height },
        )
    }
}

impl ChainLocksHandler for Recorder {
    fn on_accepted_header(&self, header: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::ChainLocks,
            Call::ChainLocksAcceptedHeader {
                header: header.height,
            },
        )
    }

    fn on_updated_tip(&self, tip: &BlockIndex, fork_point: Option<&BlockIndex>) -> HookResult {
        self.record(
            Subsystem::ChainLocks,
            Call::ChainLocksUpdatedTip {
                tip: tip.height,
                fork: height(fork_point),
            },
        )
    }
}

impl PrivateSend for Recorder {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::PrivateSend,
            Call::PrivateSendUpdatedTip { tip: tip.height },
        )
    }

    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.record(
            Subsystem::PrivateSend,
            Call::PrivateSendTx {
                txid: tx.txid,
                block: height(block),
                position,
            },
        )
    }
}

impl PrivateSendClient for Recorder {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::PrivateSendClient,
            Call::PrivateSendClientUpdatedTip { tip: tip.height },
        )
    }
}

impl InstantSend for Recorder {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::InstantSend,
            Call::InstantSendUpdatedTip { tip: tip.height },
        )
    }

    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.record(
            Subsystem::InstantSend,
            Call::InstantSendTx {
                txid: tx.txid,
                block: height(block),
                position,
            },
        )
    }
}

impl Governance for Recorder {
    fn on_updated_tip(&self, tip: &BlockIndex, _connman: &dyn Connman) -> HookResult {
        self.record(
            Subsystem::Governance,
            Call::GovernanceUpdatedTip { tip: tip.height },
        )
    }

    fn reconcile_orphan_objects(&self, _connman: &dyn Connman) -> HookResult {
        self.record(Subsystem::Governance, Call::GovernanceOrphanObjects)
    }

    fn reconcile_orphan_votes(&self, _connman: &dyn Connman) -> HookResult {
        self.record(Subsystem::Governance, Call::GovernanceOrphanVotes)
    }

    fn cleanup_caches(&self) -> HookResult {
        self.record(Subsystem::Governance, Call::GovernanceCleanup)
    }
}

impl QuorumManager for Recorder {
    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        ibd: bool,
    ) -> HookResult {
        self.record(
            Subsystem::QuorumManager,
            Call::QuorumUpdatedTip {
                tip: tip.height,
                fork: height(fork_point),
                ibd,
            },
        )
    }
}

impl DkgSessionManager for Recorder {
    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        ibd: bool,
    ) -> HookResult {
        self.record(
            Subsystem::DkgSessionManager,
            Call::DkgUpdatedTip {
                tip: tip.height,
                fork: height(fork_point),
                ibd,
            },
        )
    }
}

impl QuorumInstantSend for Recorder {
    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        self.record(
            Subsystem::QuorumInstantSend,
            Call::QuorumInstantSendTx {
                txid: tx.txid,
                block: height(block),
                position,
            },
        )
    }

    fn on_chain_lock_formed(&self, block: &BlockIndex) -> HookResult {
        self.record(
            Subsystem::QuorumInstantSend,
            Call::QuorumInstantSendChainLock {
                block: block.height,
            },
        )
    }
}

/// Chain state with a settable tip.
#[derive(Default)]
pub struct TestChain {
    pub tip: Mutex<Option<BlockIndex>>,
    pub initial_download: Mutex<bool>,
}

impl ChainState for TestChain {
    fn active_tip(&self) -> Option<BlockIndex> {
        self.tip.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn is_initial_block_download(&self) -> bool {
        *self.initial_download.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reports the autolock deployment active from a fixed height on.
pub struct TestDeployments {
    pub autolock_height: u32,
}

impl DeploymentStates for TestDeployments {
    fn threshold_state(&self, tip: &BlockIndex, deployment: Deployment) -> ThresholdState {
        match deployment {
            Deployment::Dip0003 if tip.height >= self.autolock_height => ThresholdState::Active,
            Deployment::Dip0003 => ThresholdState::Started,
            _ => ThresholdState::Defined,
        }
    }
}

pub struct TestConnman;

impl Connman for TestConnman {
    fn peer_count(&self) -> usize {
        8
    }

}

pub const DIP0001_HEIGHT: u32 = 100;
pub const AUTOLOCK_HEIGHT: u32 = 200;

/// A dispatcher whose every collaborator is `recorder`.
pub struct Harness {
    pub dispatcher: NotificationDispatcher,
    pub recorder: Arc<Recorder>,
    pub chain: Arc<TestChain>,
}

impl Harness {
    pub fn new(lite_mode: bool, with_client: bool) -> Self {
        Self::with_recorder(Recorder::new(), lite_mode, with_client)
    }

    pub fn with_recorder(recorder: Recorder, lite_mode: bool, with_client: bool) -> Self {
        let recorder = Arc::new(recorder);
        let chain = Arc::new(TestChain::default());
        let collaborators = Collaborators {
            masternode_sync: recorder.clone(),
            mn_list_manager: recorder.clone(),
            chain_locks: recorder.clone(),
            private_send: recorder.clone(),
            private_send_client: if with_client {
                Some(recorder.clone() as Arc<dyn PrivateSendClient>)
            } else {
                None
            },
            instant_send: recorder.clone(),
            governance: recorder.clone(),
            quorum_manager: recorder.clone(),
            dkg_session_manager: recorder.clone(),
            quorum_instant_send: recorder.clone(),
        };
        let config = DispatcherConfig {
            lite_mode,
            consensus: dsnotify_sdk::config::ConsensusParams {
                dip0001_height: DIP0001_HEIGHT,
            },
        };
        let dispatcher = NotificationDispatcher::new(
            config,
            collaborators,
            chain.clone(),
            Arc::new(TestDeployments {
                autolock_height: AUTOLOCK_HEIGHT,
            }),
            Arc::new(TestConnman),
        );
        Self {
            dispatcher,
            recorder,
            chain,
        }
    }
}

/// Block at `height` on a straight test chain.
pub fn block(height: u32) -> BlockIndex {
    let prev = height
        .checked_sub(1)
        .map(|h| BlockHash::from_bytes(hash_bytes(h)));
    BlockIndex::new(BlockHash::from_bytes(hash_bytes(height)), prev, height)
}

fn hash_bytes(height: u32) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..4].copy_from_slice(&height.to_le_bytes());
    bytes[31] = 0x42;
    bytes
}

pub fn tx(n: u8) -> Transaction {
    Transaction {
        txid: Txid::from_bytes([n; 32]),
        version: 1,
        inputs: Vec::new(),
        outputs: Vec::new(),
        lock_time: 0,
    }
}
