use std::{
    fs,
    io::Write,
    process::{Command, Stdio},
};

use tempfile::tempdir;

fn run_altersql(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_altersql"))
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run altersql: {error}"))
}

fn run_altersql_with_stdin(args: &[&str], document: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_altersql"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|error| panic!("failed to run altersql with stdin: {error}"));

    let mut stdin = child
        .stdin
        .take()
        .unwrap_or_else(|| panic!("failed to capture child stdin"));
    stdin
        .write_all(document.as_bytes())
        .unwrap_or_else(|error| panic!("failed to write stdin payload: {error}"));
    drop(stdin);

    child
        .wait_with_output()
        .unwrap_or_else(|error| panic!("failed to wait for altersql: {error}"))
}

const DROP_COLUMN_YAML: &str = r#"
table: { name: users }
specs:
  - drop_column: { column: { name: legacy } }
  - lock: none
"#;

#[test]
fn renders_single_yaml_statement_from_stdin() {
    let output = run_altersql_with_stdin(&[], DROP_COLUMN_YAML);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ALTER TABLE `users`  DROP COLUMN `legacy`;\n"
    );
}

#[test]
fn renders_statement_list_from_json_file_with_custom_delimiter() {
    let tempdir = tempdir().unwrap_or_else(|error| panic!("failed to create tempdir: {error}"));
    let path = tempdir.path().join("statements.json");
    fs::write(
        &path,
        r#"[
  {"table": {"name": "users"}, "specs": ["drop_primary_key"]},
  {"table": {"schema": "shop", "name": "orders"},
   "specs": [{"rename_table": {"table": {"name": "orders_v2"}}}]}
]"#,
    )
    .unwrap_or_else(|error| panic!("failed to write statements.json: {error}"));
    let path = path.to_string_lossy().into_owned();

    let output = run_altersql(&[
        "--file",
        path.as_str(),
        "--format",
        "json",
        "--delimiter",
        " /* next */",
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ALTER TABLE `users`  DROP PRIMARY KEY /* next */\n\
         ALTER TABLE `shop`.`orders`  RENAME TO `orders_v2` /* next */\n"
    );
}

#[test]
fn rejects_unknown_format_as_usage_error() {
    let output = run_altersql(&["--format", "toml"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--format"), "stderr: {stderr}");
}

#[test]
fn empty_stdin_is_a_usage_error() {
    let output = run_altersql_with_stdin(&[], "  \n");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[usage]"), "stderr: {stderr}");
    assert!(stderr.contains("--file <PATH>"), "stderr: {stderr}");
}

#[test]
fn trace_events_go_to_stderr_only() {
    let output = run_altersql_with_stdin(&["--log-level", "info"], DROP_COLUMN_YAML);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout, "ALTER TABLE `users`  DROP COLUMN `legacy`;\n");
    assert!(
        stderr.contains("rendered alter table statement"),
        "stderr must carry the info trace, got: {stderr}"
    );
}

#[test]
fn renders_yaml_statement_list_with_nested_map_form_enums() {
    let document = r#"
- table: { name: users }
  specs:
    - add_constraint:
        kind:
          foreign_key:
            table: { name: teams }
            columns: [{ column: { name: id } }]
            on_delete: cascade
        name: fk_team
        keys: [{ column: { name: team_id } }]
- table: { name: teams }
  specs:
    - table_option: { options: [{ row_format: compact }] }
"#;

    let output = run_altersql_with_stdin(&[], document);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "ALTER TABLE `users`  ADD CONSTRAINT `fk_team` FOREIGN KEY (`team_id`) REFERENCES `teams` (`id`) ON DELETE CASCADE;\n\
         ALTER TABLE `teams`  ROW_FORMAT = COMPACT;\n"
    );
}
