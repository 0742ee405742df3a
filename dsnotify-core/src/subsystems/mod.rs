//! Capability interfaces of the subsystems the dispatcher notifies.
//!
//! Each trait exposes only the hooks the dispatcher calls. Implementations
//! are shared across threads and handle their own synchronization, so every
//! hook takes `&self`.

pub mod governance;
pub mod instantsend;
pub mod llmq;
pub mod masternode;
pub mod privatesend;

pub use governance::Governance;
pub use instantsend::InstantSend;
pub use llmq::{ChainLocksHandler, DkgSessionManager, QuorumInstantSend, QuorumManager};
pub use masternode::{DeterministicMnManager, MasternodeSync};
pub use privatesend::{PrivateSend, PrivateSendClient};
