use serde::{Deserialize, Serialize};

use super::{ColumnName, Ident, TableName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Ident>,
    pub keys: Vec<IndexColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<IndexOption>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, keys: Vec<IndexColumn>) -> Self {
        Self {
            kind,
            name: None,
            keys,
            option: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Ident::new(name));
        self
    }

    #[must_use]
    pub fn with_option(mut self, option: IndexOption) -> Self {
        self.option = Some(option);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Key,
    Index,
    Unique,
    UniqueKey,
    UniqueIndex,
    ForeignKey(ReferenceDef),
    PrimaryKey,
    Fulltext,
    Check(String),
}

impl ConstraintKind {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Key => "Key",
            Self::Index => "Index",
            Self::Unique => "Unique",
            Self::UniqueKey => "UniqueKey",
            Self::UniqueIndex => "UniqueIndex",
            Self::ForeignKey(_) => "ForeignKey",
            Self::PrimaryKey => "PrimaryKey",
            Self::Fulltext => "Fulltext",
            Self::Check(_) => "Check",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexColumn {
    pub column: ColumnName,
    /// Prefix length; `None` indexes the full column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

impl IndexColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            column: ColumnName::new(name),
            length: None,
        }
    }

    pub fn prefix(name: impl Into<String>, length: u32) -> Self {
        Self {
            column: ColumnName::new(name),
            length: Some(length),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDef {
    pub table: TableName,
    pub columns: Vec<IndexColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ReferOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_update: Option<ReferOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferOption {
    NoOption,
    Restrict,
    Cascade,
    SetNull,
    NoAction,
    SetDefault,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOption {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tp: Option<IndexType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexType {
    Btree,
    Hash,
}
