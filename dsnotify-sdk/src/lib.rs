//! Shared chain objects for the dsnotify blockchain-event dispatcher.
//!
//! These types are produced by the block-validation pipeline and handed,
//! read-only, to the dispatcher and every subsystem it notifies.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod config;
pub mod objects;
