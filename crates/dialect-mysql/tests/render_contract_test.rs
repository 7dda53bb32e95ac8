#[allow(dead_code)]
#[path = "support/fixtures.rs"]
mod fixtures;

use std::{
    error::Error as StdError,
    sync::{Arc, Mutex},
};

use altersql_core::{
    AlterTableSpec, AlterTableStatement, ColumnDef, ColumnName, ColumnOption, ColumnPosition,
    Constraint, ConstraintKind, Dialect, Error, FieldType, Ident, IndexColumn, LockType,
    RenderError, RenderTrace, TableName, TableOption, TableOptionRenderer,
};
use altersql_dialect_mysql::{MysqlDialect, escape_name};
use fixtures::{column, int, render_err};
use tracing_test::traced_test;

#[derive(Debug, Default, Clone)]
struct RecordingTrace {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingTrace {
    fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, event: String) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

impl RenderTrace for RecordingTrace {
    fn spec_rendered(&self, index: usize, spec: &AlterTableSpec, text: &str) {
        self.record(format!("spec[{index}] {}: {text}", spec.variant_name()));
    }

    fn statement_rendered(&self, sql: &str) {
        self.record(format!("statement: {sql}"));
    }
}

struct CompactTableOptions;

impl TableOptionRenderer for CompactTableOptions {
    fn render_table_option(
        &self,
        option: &TableOption,
    ) -> Result<String, Box<dyn StdError + Send + Sync>> {
        match option {
            TableOption::Engine(engine) => Ok(format!("ENGINE={engine}")),
            other => Err(format!("{} is not supported here", other.variant_name()).into()),
        }
    }
}

#[test]
fn fulltext_column_option_aborts_rendering() {
    let error = render_err(
        "t",
        vec![
            AlterTableSpec::DropPrimaryKey,
            AlterTableSpec::ModifyColumn {
                column: column(
                    "body",
                    int(),
                    vec![ColumnOption::NotNull, ColumnOption::Fulltext],
                ),
                position: ColumnPosition::None,
            },
        ],
    );

    match error {
        Error::Render(RenderError::Unsupported {
            construct, variant, ..
        }) => {
            assert_eq!(construct, "column option");
            assert_eq!(variant, "Fulltext");
        }
        other => panic!("expected unsupported column option, got {other:?}"),
    }
}

#[test]
fn failing_table_option_propagates_with_source() {
    let error = render_err(
        "t",
        vec![AlterTableSpec::TableOption {
            options: vec![
                TableOption::Engine("InnoDB".to_string()),
                TableOption::ShardRowIdBits(4),
            ],
        }],
    );

    match &error {
        Error::Render(RenderError::TableOption { option, source }) => {
            assert_eq!(option, "ShardRowIdBits");
            assert!(source.to_string().contains("SHARD_ROW_ID_BITS"));
        }
        other => panic!("expected table option error, got {other:?}"),
    }
    assert_eq!(error.category(), "table_option");
}

#[test]
fn custom_table_option_renderer_is_used() {
    let dialect = MysqlDialect::new().with_table_options(CompactTableOptions);
    let stmt = AlterTableStatement::new(
        TableName::new("t"),
        vec![AlterTableSpec::TableOption {
            options: vec![
                TableOption::Engine("MyISAM".to_string()),
                TableOption::Engine("InnoDB".to_string()),
            ],
        }],
    );

    let sql = dialect
        .render_alter_table(&stmt)
        .expect("custom table options should render");
    assert_eq!(sql, "ALTER TABLE `t`  ENGINE=MyISAM ENGINE=InnoDB");

    let failing = AlterTableStatement::new(
        TableName::new("t"),
        vec![AlterTableSpec::TableOption {
            options: vec![TableOption::MaxRows(10)],
        }],
    );
    let error = dialect
        .render_alter_table(&failing)
        .expect_err("custom renderer failure must abort the statement");
    assert!(error.to_string().contains("MaxRows"));
}

#[test]
fn add_columns_without_columns_is_an_invariant_violation() {
    let error = render_err(
        "t",
        vec![AlterTableSpec::AddColumns {
            columns: vec![],
            position: ColumnPosition::First,
        }],
    );

    assert!(matches!(
        error,
        Error::Render(RenderError::InvariantViolation {
            node: "alter spec",
            ..
        })
    ));
}

#[test]
fn later_failure_discards_earlier_clauses() {
    let error = render_err(
        "t",
        vec![
            AlterTableSpec::DropIndex {
                name: Ident::new("idx_a"),
            },
            AlterTableSpec::AddConstraint(Constraint::new(ConstraintKind::Index, vec![])),
        ],
    );

    assert_eq!(error.category(), "invariant");
}

#[test]
fn every_spec_variant_renders_text_except_lock() {
    let specs = vec![
        AlterTableSpec::TableOption {
            options: vec![TableOption::AutoIncrement(10)],
        },
        AlterTableSpec::AddColumns {
            columns: vec![ColumnDef::new("a", FieldType::new(altersql_core::TypeCode::Long))],
            position: ColumnPosition::None,
        },
        AlterTableSpec::DropColumn {
            column: ColumnName::new("a"),
        },
        AlterTableSpec::DropIndex {
            name: Ident::new("idx"),
        },
        AlterTableSpec::AddConstraint(Constraint::new(
            ConstraintKind::Key,
            vec![IndexColumn::new("a")],
        )),
        AlterTableSpec::DropForeignKey {
            name: Ident::new("fk"),
        },
        AlterTableSpec::ModifyColumn {
            column: ColumnDef::new("a", int()),
            position: ColumnPosition::None,
        },
        AlterTableSpec::ChangeColumn {
            old: ColumnName::new("a"),
            column: ColumnDef::new("b", int()),
            position: ColumnPosition::None,
        },
        AlterTableSpec::RenameTable {
            table: TableName::new("u"),
        },
        AlterTableSpec::AlterColumnDefault {
            column: ColumnDef::new("a", int()),
        },
        AlterTableSpec::DropPrimaryKey,
        AlterTableSpec::Lock(LockType::Default),
    ];
    let trace = RecordingTrace::default();
    let dialect = MysqlDialect::new().with_trace(trace.clone());

    for spec in specs {
        let is_lock = matches!(spec, AlterTableSpec::Lock(_));
        let stmt = AlterTableStatement::new(TableName::new("t"), vec![spec]);
        let sql = dialect
            .render_alter_table(&stmt)
            .expect("every supported variant should render");
        let tail = sql
            .strip_prefix("ALTER TABLE `t`  ")
            .unwrap_or_else(|| panic!("unexpected prefix in {sql}"));

        assert_eq!(tail.is_empty(), is_lock, "unexpected tail `{tail}`");
    }

    assert_eq!(trace.events().len(), 24);
}

#[test]
fn trace_receives_each_spec_in_order_and_the_final_statement() {
    let trace = RecordingTrace::default();
    let dialect = MysqlDialect::new().with_trace(trace.clone());
    let stmt = AlterTableStatement::new(
        TableName::new("t"),
        vec![
            AlterTableSpec::Lock(LockType::Exclusive),
            AlterTableSpec::DropPrimaryKey,
            AlterTableSpec::RenameTable {
                table: TableName::new("u"),
            },
        ],
    );

    dialect
        .render_alter_table(&stmt)
        .expect("statement should render");

    assert_eq!(
        trace.events(),
        vec![
            "spec[0] Lock: ".to_string(),
            "spec[1] DropPrimaryKey: DROP PRIMARY KEY".to_string(),
            "spec[2] RenameTable: RENAME TO `u`".to_string(),
            "statement: ALTER TABLE `t`  DROP PRIMARY KEY,RENAME TO `u`".to_string(),
        ]
    );
}

#[traced_test]
#[test]
fn default_dialect_reports_statements_through_tracing() {
    let dialect = MysqlDialect::default();
    let stmt = AlterTableStatement::new(
        TableName::new("audit_log"),
        vec![AlterTableSpec::DropPrimaryKey],
    );

    dialect
        .render_alter_table(&stmt)
        .expect("statement should render");

    assert!(logs_contain("rendered alter table statement"));
    assert!(logs_contain("audit_log"));
}

#[test]
fn escaped_names_round_trip_through_backtick_quoting() {
    for name in ["plain", "a`b", "``", "`lead", "trail`", "mixed `x` y"] {
        let escaped = escape_name(name);
        let quoted = format!("`{escaped}`");

        assert_eq!(unquote_backticks(&quoted), name);
        assert_eq!(
            escaped.matches('`').count(),
            name.matches('`').count() * 2
        );
    }
}

fn unquote_backticks(quoted: &str) -> String {
    let inner = quoted
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
        .unwrap_or_else(|| panic!("not backtick quoted: {quoted}"));
    inner.replace("``", "`")
}
