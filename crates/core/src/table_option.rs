use std::error::Error as StdError;

use crate::TableOption;

/// Renders one table-level option to SQL text. Failures are reported to the
/// statement renderer, which aborts the whole statement.
pub trait TableOptionRenderer: Send + Sync {
    fn render_table_option(
        &self,
        option: &TableOption,
    ) -> std::result::Result<String, Box<dyn StdError + Send + Sync>>;
}
