use crate::chain::Connman;
use crate::error::HookResult;
use dsnotify_sdk::objects::BlockIndex;

/// Masternode sync state machine.
pub trait MasternodeSync: Send + Sync {
    fn on_accepted_header(&self, header: &BlockIndex) -> HookResult;

    fn on_header_tip(
        &self,
        header: &BlockIndex,
        initial_download: bool,
        connman: &dyn Connman,
    ) -> HookResult;

    fn on_updated_tip(
        &self,
        tip: &BlockIndex,
        initial_download: bool,
        connman: &dyn Connman,
    ) -> HookResult;
}

/// Keeps the deterministic masternode list in step with the active chain.
pub trait DeterministicMnManager: Send + Sync {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult;
}
