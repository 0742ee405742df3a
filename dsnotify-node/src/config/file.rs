//! TOML file configuration structures.
//!
//! These structs directly map to the `dsnotify.toml` file format.

use dsnotify_sdk::config::Network;
use dsnotify_sdk::objects::Deployment;
use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub node: NodeSection,
    /// Overrides the network's built-in consensus parameters.
    #[serde(default)]
    pub consensus: Option<ConsensusSection>,
    #[serde(default)]
    pub deployments: Vec<DeploymentSection>,
    #[serde(default)]
    pub replay: ReplaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSection {
    #[serde(default)]
    pub network: Network,
    /// Skip the optional masternode subsystems.
    #[serde(default)]
    pub lite_mode: bool,
    /// Attach the client-side mixing subsystem.
    #[serde(default = "default_wallet")]
    pub wallet: bool,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            network: Network::default(),
            lite_mode: false,
            wallet: default_wallet(),
        }
    }
}

fn default_wallet() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusSection {
    pub dip0001_height: u32,
}

/// Height at which a version-bits deployment becomes active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentSection {
    pub deployment: Deployment,
    pub activation_height: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaySection {
    /// Report initial block download while the tip is below this height.
    #[serde(default)]
    pub initial_block_download_below: Option<u32>,
}
