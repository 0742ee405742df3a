use crate::error::HookResult;
use dsnotify_sdk::objects::{BlockIndex, Transaction, TxPosition};

/// Legacy instant-send lock tracker.
pub trait InstantSend: Send + Sync {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult;

    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult;
}
