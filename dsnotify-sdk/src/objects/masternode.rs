use super::hash::{BlockHash, ProTxHash};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasternodeEntry {
    pub pro_tx_hash: ProTxHash,
    pub service: SocketAddr,
    /// False once the masternode has been PoSe-banned.
    #[serde(default = "default_valid")]
    pub is_valid: bool,
}

fn default_valid() -> bool {
    true
}

/// The deterministic masternode list as of a given block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicMnList {
    pub block_hash: BlockHash,
    pub height: u32,
    #[serde(default)]
    pub masternodes: Vec<MasternodeEntry>,
}

impl DeterministicMnList {
    pub fn valid_count(&self) -> usize {
        self.masternodes.iter().filter(|mn| mn.is_valid).count()
    }
}
