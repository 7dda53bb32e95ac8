use std::fmt::Write as _;

use altersql_core::{
    CHARSET_BIN, ColumnDef, ColumnName, ColumnOption, ColumnPosition, Expr, FieldType, Ident,
    IndexColumn, RenderError, RenderTrace, Result, TableName, Value,
};

const COLUMN_OPTION_CONSTRUCT: &str = "column option";

/// Which parts of a field type a column clause spells out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeDetail {
    /// Type, flags, charset and collation; used when a column is created.
    Full,
    /// Type and flags only. MODIFY/CHANGE COLUMN cannot alter charset or collation.
    Compact,
}

/// Doubles every backtick so the name can be wrapped in backticks.
pub fn escape_name(name: &str) -> String {
    name.replace('`', "``")
}

pub(crate) fn write_ident(out: &mut String, ident: &Ident) {
    out.push('`');
    out.push_str(&escape_name(&ident.value));
    out.push('`');
}

fn present(segment: &Option<Ident>) -> Option<&Ident> {
    segment.as_ref().filter(|ident| !ident.is_empty())
}

pub(crate) fn write_table_name(out: &mut String, table: &TableName) {
    if let Some(schema) = present(&table.schema) {
        write_ident(out, schema);
        out.push('.');
    }
    write_ident(out, &table.name);
}

pub(crate) fn write_column_name(out: &mut String, column: &ColumnName) {
    if let Some(schema) = present(&column.schema) {
        write_ident(out, schema);
        out.push('.');
    }
    if let Some(table) = present(&column.table) {
        write_ident(out, table);
        out.push('.');
    }
    write_ident(out, &column.name);
}

pub(crate) fn write_index_column(out: &mut String, column: &IndexColumn) {
    write_column_name(out, &column.column);
    if let Some(length) = column.length {
        write!(out, " ({length})").expect("writing to String should not fail");
    }
}

// Embedded quotes are not escaped; values come from a parsed tree.
pub(crate) fn write_string_literal(out: &mut String, value: &str) {
    out.push('\'');
    out.push_str(value);
    out.push('\'');
}

pub(crate) fn write_default_value(out: &mut String, expr: &Expr) {
    match expr {
        Expr::FunctionCall { name } => out.push_str(name),
        Expr::Value(Value::Null) => out.push_str("NULL"),
        Expr::Value(Value::Integer(value)) => {
            write!(out, "{value}").expect("writing to String should not fail");
        }
        Expr::Value(Value::String(value)) => write_string_literal(out, value),
        Expr::Value(other) => {
            write!(out, "{other}").expect("writing to String should not fail");
        }
    }
}

pub(crate) fn write_field_type(out: &mut String, field_type: &FieldType, trace: &dyn RenderTrace) {
    let start = out.len();
    push_field_type(out, field_type);
    trace.field_type_rendered(field_type, &out[start..]);
}

pub(crate) fn write_full_field_type(
    out: &mut String,
    field_type: &FieldType,
    trace: &dyn RenderTrace,
) {
    let start = out.len();
    push_field_type(out, field_type);

    if field_type.is_char_or_blob() {
        if let Some(charset) = non_binary(field_type.charset.as_deref()) {
            out.push_str(" CHARACTER SET ");
            out.push_str(charset);
        }
        if let Some(collate) = non_binary(field_type.collate.as_deref()) {
            out.push_str(" COLLATE ");
            out.push_str(collate);
        }
    }

    trace.field_type_rendered(field_type, &out[start..]);
}

fn push_field_type(out: &mut String, field_type: &FieldType) {
    out.push_str(&field_type.compact_str());

    if field_type.flags.unsigned {
        out.push_str(" UNSIGNED");
    }
    if field_type.flags.zerofill {
        out.push_str(" ZEROFILL");
    }
    // binary-charset char/blob types already spell binary-ness in their name.
    if field_type.flags.binary
        && (field_type.charset.as_deref() != Some(CHARSET_BIN) || !field_type.is_char_or_blob())
    {
        out.push_str(" BINARY");
    }
}

fn non_binary(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty() && *value != CHARSET_BIN)
}

pub(crate) fn write_column_options(
    out: &mut String,
    dialect_name: &str,
    options: &[ColumnOption],
) -> Result<()> {
    for option in options {
        match option {
            ColumnOption::NotNull => out.push_str(" NOT NULL"),
            ColumnOption::Null => out.push_str(" NULL"),
            ColumnOption::DefaultValue(expr) => {
                out.push_str(" DEFAULT ");
                write_default_value(out, expr);
            }
            ColumnOption::AutoIncrement => out.push_str(" AUTO_INCREMENT"),
            ColumnOption::UniqueKey => out.push_str(" UNIQUE KEY"),
            ColumnOption::PrimaryKey => out.push_str(" PRIMARY KEY"),
            ColumnOption::Comment(comment) => {
                out.push_str(" COMMENT ");
                write_string_literal(out, comment);
            }
            ColumnOption::OnUpdateCurrentTimestamp => out.push_str(" ON UPDATE CURRENT_TIMESTAMP"),
            ColumnOption::Fulltext => {
                return Err(RenderError::unsupported(
                    COLUMN_OPTION_CONSTRUCT,
                    option.variant_name(),
                    dialect_name,
                )
                .into());
            }
        }
    }

    Ok(())
}

pub(crate) fn write_column(
    out: &mut String,
    dialect_name: &str,
    column: &ColumnDef,
    detail: TypeDetail,
    trace: &dyn RenderTrace,
) -> Result<()> {
    write_column_name(out, &column.name);
    out.push(' ');
    match detail {
        TypeDetail::Full => write_full_field_type(out, &column.tp, trace),
        TypeDetail::Compact => write_field_type(out, &column.tp, trace),
    }
    write_column_options(out, dialect_name, &column.options)
}

pub(crate) fn write_position(out: &mut String, position: &ColumnPosition) {
    match position {
        ColumnPosition::None => {}
        ColumnPosition::First => out.push_str(" FIRST"),
        ColumnPosition::After(column) => {
            out.push_str(" AFTER ");
            write_ident(out, &column.name);
        }
    }
}
