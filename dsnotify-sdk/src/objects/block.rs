use super::hash::BlockHash;
use serde::{Deserialize, Serialize};

/// A block's position in the header tree, as tracked by the validation pipeline.
///
/// Two indices describe the same block exactly when their hashes match, so
/// equality only looks at [`hash`](BlockIndex::hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockIndex {
    pub hash: BlockHash,
    /// `None` only for the genesis block.
    #[serde(default)]
    pub prev_hash: Option<BlockHash>,
    pub height: u32,
    #[serde(default)]
    pub time: u32,
    #[serde(default)]
    pub version: i32,
}

impl BlockIndex {
    pub fn new(hash: BlockHash, prev_hash: Option<BlockHash>, height: u32) -> Self {
        Self {
            hash,
            prev_hash,
            height,
            time: 0,
            version: 0,
        }
    }
}

impl PartialEq for BlockIndex {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for BlockIndex {}
