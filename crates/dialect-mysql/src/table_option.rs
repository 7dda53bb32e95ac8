use std::error::Error as StdError;

use altersql_core::{RowFormat, TableOption, TableOptionRenderer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableOptionError {
    #[error("{option} requires a non-empty value")]
    EmptyValue { option: &'static str },
    #[error("{option} is a TiDB table option with no MySQL equivalent")]
    NotMysql { option: &'static str },
}

/// MySQL spelling of table-level options, `NAME = value`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlTableOptions;

impl TableOptionRenderer for MysqlTableOptions {
    fn render_table_option(
        &self,
        option: &TableOption,
    ) -> Result<String, Box<dyn StdError + Send + Sync>> {
        Ok(render_table_option(option)?)
    }
}

pub fn render_table_option(option: &TableOption) -> Result<String, TableOptionError> {
    let sql = match option {
        TableOption::Engine(engine) => format!("ENGINE = {}", non_empty("ENGINE", engine)?),
        TableOption::Charset(charset) => format!(
            "DEFAULT CHARACTER SET = {}",
            non_empty("CHARACTER SET", charset)?
        ),
        TableOption::Collate(collate) => {
            format!("DEFAULT COLLATE = {}", non_empty("COLLATE", collate)?)
        }
        TableOption::AutoIncrement(value) => format!("AUTO_INCREMENT = {value}"),
        TableOption::Comment(comment) => format!("COMMENT = '{comment}'"),
        TableOption::AvgRowLength(value) => format!("AVG_ROW_LENGTH = {value}"),
        TableOption::Checksum(value) => format!("CHECKSUM = {value}"),
        TableOption::Compression(value) => format!("COMPRESSION = '{value}'"),
        TableOption::Connection(value) => format!("CONNECTION = '{value}'"),
        TableOption::Password(value) => format!("PASSWORD = '{value}'"),
        TableOption::KeyBlockSize(value) => format!("KEY_BLOCK_SIZE = {value}"),
        TableOption::MaxRows(value) => format!("MAX_ROWS = {value}"),
        TableOption::MinRows(value) => format!("MIN_ROWS = {value}"),
        TableOption::DelayKeyWrite(value) => format!("DELAY_KEY_WRITE = {value}"),
        TableOption::RowFormat(format) => format!("ROW_FORMAT = {}", row_format_sql(*format)),
        TableOption::StatsPersistent => "STATS_PERSISTENT = DEFAULT".to_string(),
        TableOption::ShardRowIdBits(_) => {
            return Err(TableOptionError::NotMysql {
                option: "SHARD_ROW_ID_BITS",
            });
        }
        TableOption::PreSplitRegions(_) => {
            return Err(TableOptionError::NotMysql {
                option: "PRE_SPLIT_REGIONS",
            });
        }
    };

    Ok(sql)
}

fn non_empty<'a>(option: &'static str, value: &'a str) -> Result<&'a str, TableOptionError> {
    if value.trim().is_empty() {
        return Err(TableOptionError::EmptyValue { option });
    }
    Ok(value)
}

fn row_format_sql(format: RowFormat) -> &'static str {
    match format {
        RowFormat::Default => "DEFAULT",
        RowFormat::Dynamic => "DYNAMIC",
        RowFormat::Fixed => "FIXED",
        RowFormat::Compressed => "COMPRESSED",
        RowFormat::Redundant => "REDUNDANT",
        RowFormat::Compact => "COMPACT",
    }
}

#[cfg(test)]
mod tests {
    use altersql_core::{RowFormat, TableOption};

    use super::{TableOptionError, render_table_option};

    #[test]
    fn renders_row_formats() {
        let cases = [
            (RowFormat::Default, "ROW_FORMAT = DEFAULT"),
            (RowFormat::Dynamic, "ROW_FORMAT = DYNAMIC"),
            (RowFormat::Fixed, "ROW_FORMAT = FIXED"),
            (RowFormat::Compressed, "ROW_FORMAT = COMPRESSED"),
            (RowFormat::Redundant, "ROW_FORMAT = REDUNDANT"),
            (RowFormat::Compact, "ROW_FORMAT = COMPACT"),
        ];

        for (format, expected) in cases {
            assert_eq!(
                render_table_option(&TableOption::RowFormat(format)),
                Ok(expected.to_string())
            );
        }
    }

    #[test]
    fn rejects_blank_engine_and_tidb_options() {
        assert_eq!(
            render_table_option(&TableOption::Engine("  ".to_string())),
            Err(TableOptionError::EmptyValue { option: "ENGINE" })
        );
        assert_eq!(
            render_table_option(&TableOption::ShardRowIdBits(4)),
            Err(TableOptionError::NotMysql {
                option: "SHARD_ROW_ID_BITS"
            })
        );
    }
}
