use serde::{Deserialize, Serialize};

use super::{ColumnName, Expr, FieldType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: ColumnName,
    #[serde(rename = "type")]
    pub tp: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ColumnOption>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, tp: FieldType) -> Self {
        Self {
            name: ColumnName::new(name),
            tp,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<ColumnOption>) -> Self {
        self.options = options;
        self
    }

    /// First `DEFAULT` expression among the options, if any.
    pub fn default_value(&self) -> Option<&Expr> {
        self.options.iter().find_map(|option| match option {
            ColumnOption::DefaultValue(expr) => Some(expr),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOption {
    NotNull,
    Null,
    DefaultValue(Expr),
    AutoIncrement,
    UniqueKey,
    PrimaryKey,
    Comment(String),
    OnUpdateCurrentTimestamp,
    Fulltext,
}

impl ColumnOption {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::NotNull => "NotNull",
            Self::Null => "Null",
            Self::DefaultValue(_) => "DefaultValue",
            Self::AutoIncrement => "AutoIncrement",
            Self::UniqueKey => "UniqueKey",
            Self::PrimaryKey => "PrimaryKey",
            Self::Comment(_) => "Comment",
            Self::OnUpdateCurrentTimestamp => "OnUpdateCurrentTimestamp",
            Self::Fulltext => "Fulltext",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPosition {
    #[default]
    None,
    First,
    After(ColumnName),
}
