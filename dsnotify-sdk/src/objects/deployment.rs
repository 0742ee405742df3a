use serde::{Deserialize, Serialize};
use std::fmt;

/// Version-bits deployments known to the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    TestDummy,
    Csv,
    Dip0001,
    Bip147,
    Dip0003,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Deployment::TestDummy => "testdummy",
            Deployment::Csv => "csv",
            Deployment::Dip0001 => "dip0001",
            Deployment::Bip147 => "bip147",
            Deployment::Dip0003 => "dip0003",
        };
        f.write_str(name)
    }
}

/// Version-bits threshold state of a deployment at a given block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdState {
    Defined,
    Started,
    LockedIn,
    Active,
    Failed,
}

impl ThresholdState {
    pub fn is_active(self) -> bool {
        self == ThresholdState::Active
    }
}
