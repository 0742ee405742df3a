//! Configuration module for dsnotify-node.
//!
//! Handles loading configuration from a TOML file and applying CLI
//! overrides on top of it.

pub mod file;

use crate::config::file::FileConfig;
use dsnotify_core::DispatcherConfig;
use dsnotify_sdk::config::{ConsensusParams, Network};
use dsnotify_sdk::objects::Deployment;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Settings given on the command line that take precedence over the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub lite_mode: bool,
    pub no_wallet: bool,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub network: Network,
    pub dispatcher: DispatcherConfig,
    pub wallet: bool,
    pub deployments: HashMap<Deployment, u32>,
    pub initial_block_download_below: Option<u32>,
}

pub struct ConfigLoader {
    config_path: PathBuf,
    overrides: CliOverrides,
}

impl ConfigLoader {
    pub fn new(config_path: impl AsRef<Path>, overrides: CliOverrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Read, override, validate and convert the configuration file.
    pub fn load(&self) -> Result<NodeConfig, ConfigError> {
        let content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&content)?;

        if self.overrides.lite_mode {
            file_config.node.lite_mode = true;
        }
        if self.overrides.no_wallet {
            file_config.node.wallet = false;
        }

        self.validate(&file_config)?;
        Ok(build_node_config(file_config))
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let mut seen = Vec::with_capacity(config.deployments.len());
        for entry in &config.deployments {
            if seen.contains(&entry.deployment) {
                return Err(ConfigError::ValidationError(format!(
                    "deployment {} is configured more than once",
                    entry.deployment
                )));
            }
            seen.push(entry.deployment);
        }
        Ok(())
    }
}

fn build_node_config(file_config: FileConfig) -> NodeConfig {
    let network = file_config.node.network;
    let consensus = match file_config.consensus {
        Some(section) => ConsensusParams {
            dip0001_height: section.dip0001_height,
        },
        None => ConsensusParams::for_network(network),
    };

    NodeConfig {
        network,
        dispatcher: DispatcherConfig {
            lite_mode: file_config.node.lite_mode,
            consensus,
        },
        wallet: file_config.node.wallet,
        deployments: file_config
            .deployments
            .into_iter()
            .map(|d| (d.deployment, d.activation_height))
            .collect(),
        initial_block_download_below: file_config.replay.initial_block_download_below,
    }
}
