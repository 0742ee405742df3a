//! Owned chain events as emitted by the validation pipeline.
//!
//! The pipeline normally calls the dispatcher directly; this form exists so
//! that a recorded event stream can be stored and replayed.

use super::block::BlockIndex;
use super::masternode::DeterministicMnList;
use super::transaction::{Transaction, TxPosition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChainEvent {
    /// A header was accepted into the block tree (not yet on the best chain).
    AcceptedBlockHeader { header: BlockIndex },
    /// The best known header changed.
    HeaderTip {
        header: BlockIndex,
        initial_download: bool,
    },
    /// The active chain tip changed.
    UpdatedBlockTip {
        new_tip: BlockIndex,
        #[serde(default)]
        fork_point: Option<BlockIndex>,
        initial_download: bool,
    },
    /// A transaction entered the mempool or was (dis)connected with a block.
    Transaction {
        tx: Transaction,
        #[serde(default)]
        block: Option<BlockIndex>,
        #[serde(default)]
        position: TxPosition,
    },
    MasternodeListChanged { list: DeterministicMnList },
    /// A block was finalized by a chain lock.
    ChainLock { block: BlockIndex },
}

impl ChainEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ChainEvent::AcceptedBlockHeader { .. } => "accepted_block_header",
            ChainEvent::HeaderTip { .. } => "header_tip",
            ChainEvent::UpdatedBlockTip { .. } => "updated_block_tip",
            ChainEvent::Transaction { .. } => "transaction",
            ChainEvent::MasternodeListChanged { .. } => "masternode_list_changed",
            ChainEvent::ChainLock { .. } => "chain_lock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::hash::BlockHash;

    #[test]
    fn test_updated_block_tip_json_shape() {
        let tip_hash = "11".repeat(32);
        let fork_hash = "22".repeat(32);
        let json = format!(
            r#"{{"event":"updated_block_tip","new_tip":{{"hash":"{tip_hash}","height":7}},"fork_point":{{"hash":"{fork_hash}","height":5}},"initial_download":false}}"#
        );
        let event: ChainEvent = serde_json::from_str(&json).unwrap();
        match &event {
            ChainEvent::UpdatedBlockTip {
                new_tip,
                fork_point,
                initial_download,
            } => {
                assert_eq!(new_tip.hash, BlockHash::from_bytes([0x11; 32]));
                assert_eq!(new_tip.height, 7);
                assert_eq!(fork_point.as_ref().map(|f| f.height), Some(5));
                assert!(!initial_download);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(event.kind(), "updated_block_tip");
    }

    #[test]
    fn test_transaction_defaults_to_not_in_block() {
        let json = format!(r#"{{"event":"transaction","tx":{{"txid":"{}"}}}}"#, "ab".repeat(32));
        let event: ChainEvent = serde_json::from_str(&json).unwrap();
        let ChainEvent::Transaction { tx, block, position } = event else {
            panic!("expected transaction event");
        };
        assert_eq!(tx.version, 1);
        assert!(block.is_none());
        assert_eq!(position, TxPosition::NotInBlock);
    }

    #[test]
    fn test_in_block_position_json() {
        let json = format!(
            r#"{{"event":"transaction","tx":{{"txid":"{}"}},"block":{{"hash":"{}","height":3}},"position":{{"in_block":2}}}}"#,
            "ab".repeat(32),
            "cd".repeat(32)
        );
        let event: ChainEvent = serde_json::from_str(&json).unwrap();
        let ChainEvent::Transaction { position, .. } = event else {
            panic!("expected transaction event");
        };
        assert_eq!(position.index(), Some(2));
    }
}
