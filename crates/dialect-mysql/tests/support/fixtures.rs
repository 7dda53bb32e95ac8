use altersql_core::{
    AlterTableSpec, AlterTableStatement, ColumnDef, ColumnOption, Dialect, Error, FieldType,
    NoopTrace, TableName, TypeCode,
};
use altersql_dialect_mysql::MysqlDialect;

pub fn dialect() -> MysqlDialect {
    MysqlDialect::new().with_trace(NoopTrace)
}

pub fn render(table: &str, specs: Vec<AlterTableSpec>) -> String {
    let stmt = AlterTableStatement::new(TableName::new(table), specs);
    dialect()
        .render_alter_table(&stmt)
        .unwrap_or_else(|error| panic!("expected statement to render: {error}"))
}

pub fn render_err(table: &str, specs: Vec<AlterTableSpec>) -> Error {
    let stmt = AlterTableStatement::new(TableName::new(table), specs);
    dialect()
        .render_alter_table(&stmt)
        .expect_err("expected statement rendering to fail")
}

pub fn column(name: &str, tp: FieldType, options: Vec<ColumnOption>) -> ColumnDef {
    ColumnDef::new(name, tp).with_options(options)
}

pub fn int() -> FieldType {
    FieldType::new(TypeCode::Long)
}

pub fn varchar(length: u32) -> FieldType {
    FieldType::new(TypeCode::Varchar).with_flen(length)
}
