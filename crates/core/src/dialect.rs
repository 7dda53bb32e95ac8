use crate::{AlterTableStatement, Result};

pub trait Dialect: Send + Sync {
    fn name(&self) -> &'static str;
    fn render_alter_table(&self, stmt: &AlterTableStatement) -> Result<String>;
}
