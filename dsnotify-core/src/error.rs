//! Error type shared by every collaborator hook.
//!
//! The dispatcher owns no error taxonomy of its own: a hook failure is
//! returned to the dispatcher's caller exactly as the subsystem reported it.

use std::fmt;
use thiserror::Error;

/// Boxed error reported by a subsystem.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a single collaborator hook.
pub type HookResult = Result<(), SubsystemError>;

/// The downstream subsystems the dispatcher can notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    MasternodeSync,
    DeterministicMnManager,
    ChainLocks,
    PrivateSend,
    PrivateSendClient,
    InstantSend,
    Governance,
    QuorumManager,
    DkgSessionManager,
    QuorumInstantSend,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Subsystem::MasternodeSync => "masternode sync",
            Subsystem::DeterministicMnManager => "deterministic masternode manager",
            Subsystem::ChainLocks => "chain locks handler",
            Subsystem::PrivateSend => "privatesend",
            Subsystem::PrivateSendClient => "privatesend client",
            Subsystem::InstantSend => "instantsend",
            Subsystem::Governance => "governance",
            Subsystem::QuorumManager => "quorum manager",
            Subsystem::DkgSessionManager => "DKG session manager",
            Subsystem::QuorumInstantSend => "quorum instantsend manager",
        };
        f.write_str(name)
    }
}

/// A failure reported by a downstream subsystem while handling a notification.
#[derive(Debug, Error)]
#[error("{subsystem} failed: {source}")]
pub struct SubsystemError {
    pub subsystem: Subsystem,
    pub source: BoxError,
}

impl SubsystemError {
    pub fn new(subsystem: Subsystem, source: impl Into<BoxError>) -> Self {
        Self {
            subsystem,
            source: source.into(),
        }
    }
}
