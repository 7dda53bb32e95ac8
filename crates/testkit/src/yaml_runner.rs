use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use altersql_core::{AlterTableStatement, Dialect, Error, InputError, Result};
use serde::Deserialize;
use serde_yaml::with::singleton_map_recursive;

const CASE_FILE_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// One named render case. Exactly one of `sql` and `error` must be set;
/// `error` names the expected error category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderCase {
    pub statement: AlterTableStatement,
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(String),
}

/// Enums are written in map form (`drop_index: { name: i }`), not as YAML tags.
pub fn load_render_cases_from_str(yaml: &str) -> Result<BTreeMap<String, RenderCase>> {
    singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(yaml))
        .map_err(decode_error)
}

/// Loads every `.yml`/`.yaml` file in `dir` in file-name order. Case names
/// must be unique across files.
pub fn load_render_cases_from_dir(dir: impl AsRef<Path>) -> Result<BTreeMap<String, RenderCase>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|source| read_error(dir, source))? {
        let path = entry.map_err(|source| read_error(dir, source))?.path();
        if is_case_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    let mut cases = BTreeMap::new();
    for path in paths {
        let yaml = fs::read_to_string(&path).map_err(|source| read_error(&path, source))?;
        for (name, case) in load_render_cases_from_str(&yaml)? {
            if cases.contains_key(&name) {
                return Err(InputError::DuplicateCase { name, path }.into());
            }
            cases.insert(name, case);
        }
    }

    Ok(cases)
}

pub fn run_render_case(dialect: &dyn Dialect, case: &RenderCase) -> TestResult {
    match evaluate_case(dialect, case) {
        Ok(()) => TestResult::Passed,
        Err(reason) => TestResult::Failed(reason),
    }
}

pub fn run_render_cases(
    dialect: &dyn Dialect,
    cases: &BTreeMap<String, RenderCase>,
) -> Vec<(String, TestResult)> {
    cases
        .iter()
        .map(|(name, case)| (name.clone(), run_render_case(dialect, case)))
        .collect()
}

fn evaluate_case(dialect: &dyn Dialect, case: &RenderCase) -> std::result::Result<(), String> {
    match (case.sql.as_deref(), case.error.as_deref()) {
        (Some(expected), None) => {
            evaluate_expected_sql(expected, dialect.render_alter_table(&case.statement))
        }
        (None, Some(expected)) => {
            evaluate_expected_error(expected, dialect.render_alter_table(&case.statement))
        }
        _ => Err("exactly one of `sql` and `error` must be set".to_string()),
    }
}

fn evaluate_expected_sql(
    expected: &str,
    rendered: Result<String>,
) -> std::result::Result<(), String> {
    match rendered {
        Ok(actual) if actual == expected => Ok(()),
        Ok(actual) => Err(format!(
            "SQL mismatch\nexpected: {expected:?}\nactual:   {actual:?}"
        )),
        Err(error) => Err(format!("expected SQL but rendering failed: {error}")),
    }
}

fn evaluate_expected_error(
    expected: &str,
    rendered: Result<String>,
) -> std::result::Result<(), String> {
    match rendered {
        Ok(actual) => Err(format!(
            "expected `{expected}` error, but rendering succeeded: {actual:?}"
        )),
        Err(error) if error.category() == expected => Ok(()),
        Err(error) => Err(format!(
            "expected `{expected}` error, but got `{}`: {error}",
            error.category()
        )),
    }
}

fn is_case_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| CASE_FILE_EXTENSIONS.contains(&extension))
}

fn decode_error(source: serde_yaml::Error) -> Error {
    InputError::Decode {
        format: "yaml",
        source: Box::new(source),
    }
    .into()
}

fn read_error(path: &Path, source: io::Error) -> Error {
    InputError::Read {
        path: PathBuf::from(path),
        source,
    }
    .into()
}
