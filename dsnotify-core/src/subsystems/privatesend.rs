use crate::error::HookResult;
use dsnotify_sdk::objects::{BlockIndex, Transaction, TxPosition};

/// Shared (server side) mixing protocol hooks.
pub trait PrivateSend: Send + Sync {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult;

    fn on_sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult;
}

/// Client side mixing protocol. Only wallet-enabled nodes provide one.
pub trait PrivateSendClient: Send + Sync {
    fn on_updated_tip(&self, tip: &BlockIndex) -> HookResult;
}
