#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod chain;
pub mod dispatcher;
pub mod error;
pub mod flags;
pub mod subsystems;
pub mod validation;

#[cfg(test)]
mod recorder;

pub use chain::{AUTOLOCK_DEPLOYMENT, ChainState, Connman, DeploymentStates};
pub use dispatcher::{Collaborators, DispatcherConfig, NotificationDispatcher};
pub use error::{BoxError, HookResult, Subsystem, SubsystemError};
pub use flags::ActivationFlags;
pub use validation::ValidationInterface;
