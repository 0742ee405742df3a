use serde::{Deserialize, Serialize};
use std::fmt;

/// Networks with built-in consensus parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Regtest,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Regtest => "regtest",
        };
        f.write_str(name)
    }
}

/// Height-gated consensus parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// First height at which DIP0001 rules apply.
    pub dip0001_height: u32,
}

impl ConsensusParams {
    pub fn for_network(network: Network) -> Self {
        let dip0001_height = match network {
            Network::Mainnet => 782_208,
            Network::Testnet => 4_400,
            Network::Devnet | Network::Regtest => 2_000,
        };
        Self { dip0001_height }
    }

    /// Whether the DIP0001 rules are in force for a tip at `height`.
    pub fn dip0001_active_at(&self, height: u32) -> bool {
        height >= self.dip0001_height
    }
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}
