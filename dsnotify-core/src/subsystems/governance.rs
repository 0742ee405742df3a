use crate::chain::Connman;
use crate::error::HookResult;
use dsnotify_sdk::objects::BlockIndex;

/// Governance object and vote manager.
pub trait Governance: Send + Sync {
    fn on_updated_tip(&self, tip: &BlockIndex, connman: &dyn Connman) -> HookResult;

    /// Re-check objects whose submitting masternode is missing from the list.
    fn reconcile_orphan_objects(&self, connman: &dyn Connman) -> HookResult;

    /// Re-check votes cast by masternodes missing from the list.
    fn reconcile_orphan_votes(&self, connman: &dyn Connman) -> HookResult;

    /// Evict stale entries from the object and vote caches.
    fn cleanup_caches(&self) -> HookResult;
}
