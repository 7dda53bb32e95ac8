use altersql_core::{
    AlterTableSpec, AlterTableStatement, RenderError, RenderTrace, Result, TableOption,
    TableOptionRenderer,
};

use crate::{
    constraint::write_constraint,
    to_sql::{
        TypeDetail, write_column, write_column_name, write_ident, write_position, write_table_name,
    },
};

const SPEC_SEPARATOR: char = ',';

pub(crate) struct AlterTableRenderer<'a> {
    pub(crate) dialect_name: &'a str,
    pub(crate) table_options: &'a dyn TableOptionRenderer,
    pub(crate) trace: &'a dyn RenderTrace,
}

impl AlterTableRenderer<'_> {
    /// Renders `ALTER TABLE <table>  <spec>,<spec>,...`. Specs that render to
    /// nothing are skipped; any failure discards the whole statement.
    pub(crate) fn render_statement(&self, stmt: &AlterTableStatement) -> Result<String> {
        let mut sql = String::from("ALTER TABLE ");
        write_table_name(&mut sql, &stmt.table);
        sql.push_str("  ");

        let mut wrote_clause = false;
        for (index, spec) in stmt.specs.iter().enumerate() {
            let mark = sql.len();
            if wrote_clause {
                sql.push(SPEC_SEPARATOR);
            }

            let clause_start = sql.len();
            self.write_spec(&mut sql, spec)?;
            self.trace.spec_rendered(index, spec, &sql[clause_start..]);

            if sql.len() == clause_start {
                sql.truncate(mark);
                continue;
            }
            wrote_clause = true;
        }

        self.trace.statement_rendered(&sql);
        Ok(sql)
    }

    fn write_spec(&self, out: &mut String, spec: &AlterTableSpec) -> Result<()> {
        match spec {
            AlterTableSpec::TableOption { options } => self.write_table_options(out, options)?,
            AlterTableSpec::AddColumns { columns, position } => {
                if columns.is_empty() {
                    return Err(
                        RenderError::invariant("alter spec", "ADD COLUMN without columns").into(),
                    );
                }

                out.push_str("ADD COLUMN (");
                for (index, column) in columns.iter().enumerate() {
                    if index > 0 {
                        out.push(',');
                    }
                    write_column(out, self.dialect_name, column, TypeDetail::Full, self.trace)?;
                    write_position(out, position);
                }
                out.push(')');
            }
            AlterTableSpec::DropColumn { column } => {
                out.push_str("DROP COLUMN ");
                write_column_name(out, column);
            }
            AlterTableSpec::DropIndex { name } => {
                out.push_str("DROP INDEX ");
                write_ident(out, name);
            }
            AlterTableSpec::AddConstraint(constraint) => {
                write_constraint(out, self.dialect_name, constraint)?;
            }
            AlterTableSpec::DropForeignKey { name } => {
                out.push_str("DROP FOREIGN KEY ");
                write_ident(out, name);
            }
            AlterTableSpec::ModifyColumn { column, position } => {
                out.push_str("MODIFY COLUMN ");
                write_column(out, self.dialect_name, column, TypeDetail::Compact, self.trace)?;
                write_position(out, position);
            }
            AlterTableSpec::ChangeColumn {
                old,
                column,
                position,
            } => {
                out.push_str("CHANGE COLUMN ");
                write_column_name(out, old);
                out.push(' ');
                write_column(out, self.dialect_name, column, TypeDetail::Compact, self.trace)?;
                write_position(out, position);
            }
            AlterTableSpec::RenameTable { table } => {
                out.push_str("RENAME TO ");
                write_table_name(out, table);
            }
            AlterTableSpec::AlterColumnDefault { column } => {
                out.push_str("ALTER COLUMN ");
                write_column_name(out, &column.name);
                match column.default_value() {
                    Some(expr) => {
                        out.push_str(" SET DEFAULT ");
                        out.push_str(&expr.to_string());
                    }
                    None => out.push_str(" DROP DEFAULT"),
                }
            }
            AlterTableSpec::DropPrimaryKey => out.push_str("DROP PRIMARY KEY"),
            // Locking hints are not rendered.
            AlterTableSpec::Lock(_) => {}
        }

        Ok(())
    }

    fn write_table_options(&self, out: &mut String, options: &[TableOption]) -> Result<()> {
        for (index, option) in options.iter().enumerate() {
            let sql = self
                .table_options
                .render_table_option(option)
                .map_err(|source| RenderError::TableOption {
                    option: option.variant_name().to_string(),
                    source,
                })?;

            if index > 0 {
                out.push(' ');
            }
            out.push_str(&sql);
        }

        Ok(())
    }
}
