mod dialect;
mod error;
mod ir;
mod table_option;
mod trace;

pub use dialect::Dialect;
pub use error::{Error, InputError, RenderError, Result};
pub use ir::{
    AlterTableSpec, AlterTableStatement, CHARSET_BIN, ColumnDef, ColumnName, ColumnOption,
    ColumnPosition, Constraint, ConstraintKind, Expr, FieldFlags, FieldType, Ident, IndexColumn,
    IndexOption, IndexType, LockType, ReferOption, ReferenceDef, RowFormat, TableName,
    TableOption, TypeCode, Value,
};
pub use table_option::TableOptionRenderer;
pub use trace::{NoopTrace, RenderTrace, TracingTrace};
