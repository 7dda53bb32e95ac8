mod constraint;
mod generator;
mod table_option;
mod to_sql;

use std::fmt;

use altersql_core::{
    AlterTableStatement, Dialect, RenderTrace, Result, TableOptionRenderer, TracingTrace,
};

pub use table_option::{MysqlTableOptions, TableOptionError, render_table_option};
pub use to_sql::escape_name;

use crate::generator::AlterTableRenderer;

const DIALECT_NAME: &str = "mysql";

/// Renders `ALTER TABLE` trees as MySQL SQL text.
pub struct MysqlDialect {
    table_options: Box<dyn TableOptionRenderer>,
    trace: Box<dyn RenderTrace>,
}

impl MysqlDialect {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_table_options(mut self, renderer: impl TableOptionRenderer + 'static) -> Self {
        self.table_options = Box::new(renderer);
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: impl RenderTrace + 'static) -> Self {
        self.trace = Box::new(trace);
        self
    }
}

impl Default for MysqlDialect {
    fn default() -> Self {
        Self {
            table_options: Box::new(MysqlTableOptions),
            trace: Box::new(TracingTrace),
        }
    }
}

impl fmt::Debug for MysqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MysqlDialect").finish_non_exhaustive()
    }
}

impl Dialect for MysqlDialect {
    fn name(&self) -> &'static str {
        DIALECT_NAME
    }

    fn render_alter_table(&self, stmt: &AlterTableStatement) -> Result<String> {
        AlterTableRenderer {
            dialect_name: DIALECT_NAME,
            table_options: self.table_options.as_ref(),
            trace: self.trace.as_ref(),
        }
        .render_statement(stmt)
    }
}
