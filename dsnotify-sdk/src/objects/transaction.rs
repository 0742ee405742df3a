use super::hash::Txid;
use serde::{Deserialize, Serialize};

/// Reference to an output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: Txid,
    pub vout: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Value in duffs.
    pub value: i64,
    #[serde(default, with = "hex_bytes")]
    pub script_pubkey: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: Txid,
    #[serde(default = "default_version")]
    pub version: i32,
    #[serde(default)]
    pub inputs: Vec<OutPoint>,
    #[serde(default)]
    pub outputs: Vec<TxOut>,
    #[serde(default)]
    pub lock_time: u32,
}

fn default_version() -> i32 {
    1
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Sum of all output values, or `None` if it does not fit in an `i64`.
    pub fn total_output_value(&self) -> Option<i64> {
        self.outputs
            .iter()
            .try_fold(0i64, |total, o| total.checked_add(o.value))
    }
}

/// Where a synced transaction sits relative to a block.
///
/// `NotInBlock` covers both a fresh mempool arrival and a transaction whose
/// block is being disconnected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxPosition {
    #[default]
    NotInBlock,
    InBlock(u32),
}

impl TxPosition {
    pub fn index(self) -> Option<u32> {
        match self {
            TxPosition::NotInBlock => None,
            TxPosition::InBlock(index) => Some(index),
        }
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}
