pub mod block;
pub mod deployment;
pub mod event;
pub mod hash;
pub mod masternode;
pub mod transaction;

pub use block::BlockIndex;
pub use deployment::{Deployment, ThresholdState};
pub use event::ChainEvent;
pub use hash::{BlockHash, HashParseError, ProTxHash, Txid};
pub use masternode::{DeterministicMnList, MasternodeEntry};
pub use transaction::{OutPoint, Transaction, TxOut, TxPosition};
