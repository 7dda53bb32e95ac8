use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableOption {
    Engine(String),
    Charset(String),
    Collate(String),
    AutoIncrement(u64),
    Comment(String),
    AvgRowLength(u64),
    Checksum(u64),
    Compression(String),
    Connection(String),
    Password(String),
    KeyBlockSize(u64),
    MaxRows(u64),
    MinRows(u64),
    DelayKeyWrite(u64),
    RowFormat(RowFormat),
    StatsPersistent,
    ShardRowIdBits(u64),
    PreSplitRegions(u64),
}

impl TableOption {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Engine(_) => "Engine",
            Self::Charset(_) => "Charset",
            Self::Collate(_) => "Collate",
            Self::AutoIncrement(_) => "AutoIncrement",
            Self::Comment(_) => "Comment",
            Self::AvgRowLength(_) => "AvgRowLength",
            Self::Checksum(_) => "Checksum",
            Self::Compression(_) => "Compression",
            Self::Connection(_) => "Connection",
            Self::Password(_) => "Password",
            Self::KeyBlockSize(_) => "KeyBlockSize",
            Self::MaxRows(_) => "MaxRows",
            Self::MinRows(_) => "MinRows",
            Self::DelayKeyWrite(_) => "DelayKeyWrite",
            Self::RowFormat(_) => "RowFormat",
            Self::StatsPersistent => "StatsPersistent",
            Self::ShardRowIdBits(_) => "ShardRowIdBits",
            Self::PreSplitRegions(_) => "PreSplitRegions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowFormat {
    Default,
    Dynamic,
    Fixed,
    Compressed,
    Redundant,
    Compact,
}
