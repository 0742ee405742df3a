//! Interface the validation pipeline uses to announce chain progress.

use crate::dispatcher::NotificationDispatcher;
use crate::error::HookResult;
use dsnotify_sdk::objects::{BlockIndex, DeterministicMnList, Transaction, TxPosition};

/// Receiver of validation events.
///
/// Every method defaults to doing nothing so listeners only implement what
/// they care about. The pipeline serializes calls per event stream.
pub trait ValidationInterface: Send + Sync {
    fn accepted_block_header(&self, _header: &BlockIndex) -> HookResult {
        Ok(())
    }

    fn notify_header_tip(&self, _header: &BlockIndex, _initial_download: bool) -> HookResult {
        Ok(())
    }

    fn updated_block_tip(
        &self,
        _new_tip: &BlockIndex,
        _fork_point: Option<&BlockIndex>,
        _initial_download: bool,
    ) -> HookResult {
        Ok(())
    }

    fn sync_transaction(
        &self,
        _tx: &Transaction,
        _block: Option<&BlockIndex>,
        _position: TxPosition,
    ) -> HookResult {
        Ok(())
    }

    fn notify_masternode_list_changed(&self, _new_list: &DeterministicMnList) -> HookResult {
        Ok(())
    }

    fn notify_chain_lock(&self, _block: &BlockIndex) -> HookResult {
        Ok(())
    }
}

impl ValidationInterface for NotificationDispatcher {
    fn accepted_block_header(&self, header: &BlockIndex) -> HookResult {
        NotificationDispatcher::accepted_block_header(self, header)
    }

    fn notify_header_tip(&self, header: &BlockIndex, initial_download: bool) -> HookResult {
        NotificationDispatcher::notify_header_tip(self, header, initial_download)
    }

    fn updated_block_tip(
        &self,
        new_tip: &BlockIndex,
        fork_point: Option<&BlockIndex>,
        initial_download: bool,
    ) -> HookResult {
        NotificationDispatcher::updated_block_tip(self, new_tip, fork_point, initial_download)
    }

    fn sync_transaction(
        &self,
        tx: &Transaction,
        block: Option<&BlockIndex>,
        position: TxPosition,
    ) -> HookResult {
        NotificationDispatcher::sync_transaction(self, tx, block, position)
    }

    fn notify_masternode_list_changed(&self, new_list: &DeterministicMnList) -> HookResult {
        NotificationDispatcher::notify_masternode_list_changed(self, new_list)
    }

    fn notify_chain_lock(&self, block: &BlockIndex) -> HookResult {
        NotificationDispatcher::notify_chain_lock(self, block)
    }
}
