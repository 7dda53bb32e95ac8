use serde::{Deserialize, Serialize};

use super::{ColumnDef, ColumnName, ColumnPosition, Constraint, Ident, TableName, TableOption};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableStatement {
    pub table: TableName,
    pub specs: Vec<AlterTableSpec>,
}

impl AlterTableStatement {
    pub fn new(table: TableName, specs: Vec<AlterTableSpec>) -> Self {
        Self { table, specs }
    }
}

/// One alteration clause. Spec order inside a statement is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlterTableSpec {
    TableOption {
        options: Vec<TableOption>,
    },
    AddColumns {
        columns: Vec<ColumnDef>,
        #[serde(default)]
        position: ColumnPosition,
    },
    DropColumn {
        column: ColumnName,
    },
    DropIndex {
        name: Ident,
    },
    AddConstraint(Constraint),
    DropForeignKey {
        name: Ident,
    },
    ModifyColumn {
        column: ColumnDef,
        #[serde(default)]
        position: ColumnPosition,
    },
    ChangeColumn {
        old: ColumnName,
        column: ColumnDef,
        #[serde(default)]
        position: ColumnPosition,
    },
    RenameTable {
        table: TableName,
    },
    AlterColumnDefault {
        column: ColumnDef,
    },
    DropPrimaryKey,
    Lock(LockType),
}

impl AlterTableSpec {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::TableOption { .. } => "TableOption",
            Self::AddColumns { .. } => "AddColumns",
            Self::DropColumn { .. } => "DropColumn",
            Self::DropIndex { .. } => "DropIndex",
            Self::AddConstraint(_) => "AddConstraint",
            Self::DropForeignKey { .. } => "DropForeignKey",
            Self::ModifyColumn { .. } => "ModifyColumn",
            Self::ChangeColumn { .. } => "ChangeColumn",
            Self::RenameTable { .. } => "RenameTable",
            Self::AlterColumnDefault { .. } => "AlterColumnDefault",
            Self::DropPrimaryKey => "DropPrimaryKey",
            Self::Lock(_) => "Lock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockType {
    #[default]
    None,
    Default,
    Shared,
    Exclusive,
}
