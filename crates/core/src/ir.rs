mod alter;
mod column;
mod constraint;
mod expr;
mod ident;
mod table_option;
mod types;

pub use alter::{AlterTableSpec, AlterTableStatement, LockType};
pub use column::{ColumnDef, ColumnOption, ColumnPosition};
pub use constraint::{
    Constraint, ConstraintKind, IndexColumn, IndexOption, IndexType, ReferOption, ReferenceDef,
};
pub use expr::{Expr, Value};
pub use ident::{ColumnName, Ident, TableName};
pub use table_option::{RowFormat, TableOption};
pub use types::{CHARSET_BIN, FieldFlags, FieldType, TypeCode};
